//! The interactive page: form, status line and event list, redrawn after every action.

use anyhow::Result;
use dialoguer::{Input, Select};
use eventdesk_core::{Action, EventApi, EventDesk, Field, RemoteClient};
use owo_colors::OwoColorize;

use crate::render::{render_page, render_status};
use crate::utils::tui::{alert, create_spinner};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Edit(Field),
    Select,
    Submit(Action),
    Refresh,
    Quit,
}

const MENU: [MenuItem; 10] = [
    MenuItem::Edit(Field::EventId),
    MenuItem::Edit(Field::EventName),
    MenuItem::Edit(Field::Venue),
    MenuItem::Edit(Field::Capacity),
    MenuItem::Select,
    MenuItem::Submit(Action::Create),
    MenuItem::Submit(Action::Update),
    MenuItem::Submit(Action::Delete),
    MenuItem::Refresh,
    MenuItem::Quit,
];

impl MenuItem {
    fn label(self) -> String {
        match self {
            MenuItem::Edit(field) => format!("Edit {}", field),
            MenuItem::Select => "Select an event".to_string(),
            MenuItem::Submit(Action::Create) => "Add".to_string(),
            MenuItem::Submit(Action::Update) => "Update".to_string(),
            MenuItem::Submit(Action::Delete) => "Delete".to_string(),
            MenuItem::Refresh => "Refresh list".to_string(),
            MenuItem::Quit => "Quit".to_string(),
        }
    }
}

pub async fn run(client: RemoteClient) -> Result<()> {
    let spinner = create_spinner("Loading events".to_string());
    let mut desk = EventDesk::mount(client).await;
    spinner.finish_and_clear();

    let labels: Vec<String> = MENU.iter().map(|item| item.label()).collect();
    let mut last = 0;

    loop {
        println!();
        println!("{}", render_page(&desk));
        println!();

        let choice = Select::new()
            .with_prompt("  What next?")
            .items(&labels)
            .default(last)
            .interact()?;
        last = choice;

        match MENU[choice] {
            MenuItem::Edit(field) => edit_field(&mut desk, field)?,
            MenuItem::Select => pick_event(&mut desk)?,
            MenuItem::Submit(action) => submit(&mut desk, action).await?,
            MenuItem::Refresh => {
                let spinner = create_spinner("Loading events".to_string());
                desk.refresh().await;
                spinner.finish_and_clear();
            }
            MenuItem::Quit => break,
        }
    }

    Ok(())
}

fn edit_field<A: EventApi>(desk: &mut EventDesk<A>, field: Field) -> Result<()> {
    let current = desk.form().get(field).to_string();

    let value: String = Input::new()
        .with_prompt(format!("  {}", field))
        .with_initial_text(current)
        .allow_empty(true)
        .validate_with(move |input: &String| -> Result<(), &str> {
            if field.is_numeric() && !is_number_or_blank(input) {
                Err("enter a whole number")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    desk.set_field(field, value);
    Ok(())
}

fn pick_event<A: EventApi>(desk: &mut EventDesk<A>) -> Result<()> {
    if desk.events().is_empty() {
        println!("{}", "  No events available".dimmed());
        return Ok(());
    }

    let items: Vec<String> = desk.events().iter().map(|e| e.to_string()).collect();
    let selection = Select::new()
        .with_prompt("  Event")
        .items(&items)
        .default(0)
        .interact_opt()?;

    if let Some(index) = selection {
        desk.select_at(index);
    }

    Ok(())
}

/// Numeric inputs may be left empty while editing; anything else must parse.
fn is_number_or_blank(input: &str) -> bool {
    let trimmed = input.trim();
    trimmed.is_empty() || trimmed.parse::<i64>().is_ok()
}

/// The status line for the request in flight, shown next to the spinner.
fn in_flight_message<A: EventApi>(desk: &EventDesk<A>) -> String {
    render_status(desk.status(), desk.phase()).unwrap_or_default()
}

async fn submit<A: EventApi>(desk: &mut EventDesk<A>, action: Action) -> Result<()> {
    let mutation = match desk.prepare(action) {
        Ok(mutation) => mutation,
        Err(notice) => return alert(&notice.to_string()),
    };

    let spinner = create_spinner(in_flight_message(desk));
    let result = mutation.send(desk.api()).await;
    let succeeded = desk.complete(mutation, result);

    if succeeded {
        spinner.set_message("Loading events");
        desk.refresh().await;
    }
    spinner.finish_and_clear();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_labels_are_unique() {
        let mut labels: Vec<String> = MENU.iter().map(|item| item.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), MENU.len());
    }

    #[test]
    fn numeric_inputs_accept_only_whole_numbers() {
        assert!(is_number_or_blank(""));
        assert!(is_number_or_blank(" 42 "));
        assert!(is_number_or_blank("-3"));
        assert!(!is_number_or_blank("5-3"));
        assert!(!is_number_or_blank("12a"));
        assert!(!is_number_or_blank("1.5"));
    }

    #[test]
    fn spinner_shows_the_action_in_flight() {
        let mut desk = EventDesk::new(RemoteClient::new("http://127.0.0.1:1"));
        desk.set_field(Field::EventId, "5");

        assert_eq!(in_flight_message(&desk), "");

        let mutation = desk.prepare(Action::Delete).unwrap();
        assert!(in_flight_message(&desk).contains("Sending delete"));

        desk.complete(mutation, Ok(Default::default()));
        assert!(!in_flight_message(&desk).contains("Sending"));
    }

    #[test]
    fn menu_offers_every_action_and_field() {
        for action in [Action::Create, Action::Update, Action::Delete] {
            assert!(MENU.contains(&MenuItem::Submit(action)));
        }
        for field in Field::ALL {
            assert!(MENU.contains(&MenuItem::Edit(field)));
        }
    }
}
