//! Terminal rendering for the event desk.
//!
//! Extension traits add colored output to eventdesk-core types using owo_colors.

use eventdesk_core::{Event, EventApi, EventDesk, EventForm, Field, Phase};
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        [
            format!("{} {}", "ID:".bold(), self.event_id),
            format!("{} {}", "Name:".bold(), self.event_name),
            format!("{} {}", "Venue:".bold(), self.venue),
            format!("{} {}", "Capacity:".bold(), self.capacity),
        ]
        .iter()
        .map(|line| format!("   {}", line))
        .collect::<Vec<_>>()
        .join("\n")
    }
}

impl Render for EventForm {
    fn render(&self) -> String {
        Field::ALL
            .iter()
            .map(|&field| {
                let label = format!("{:<11}", field.to_string());
                let value = self.get(field);
                if value.is_empty() {
                    format!("   {} {}", label.dimmed(), "(empty)".dimmed())
                } else {
                    format!("   {} {}", label.dimmed(), value)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One rendered card per event, in list order.
pub fn render_event_cards(events: &[Event]) -> Vec<String> {
    events.iter().map(Render::render).collect()
}

/// The "Event List" section, with a placeholder when there is nothing to show.
pub fn render_event_list(events: &[Event], refresh_error: Option<&str>) -> String {
    let mut lines = vec!["Event List".bold().to_string()];

    if let Some(error) = refresh_error {
        let warning = format!("   (list may be out of date: {})", error);
        lines.push(warning.yellow().to_string());
    }

    if events.is_empty() {
        lines.push("   No events available".dimmed().to_string());
    } else {
        lines.push(render_event_cards(events).join("\n\n"));
    }

    lines.join("\n")
}

/// The inline status line under the buttons.
pub fn render_status(status: Option<&str>, phase: Phase) -> Option<String> {
    if let Phase::Submitting(action) = phase {
        return Some(format!("   Sending {}...", action).dimmed().to_string());
    }

    let msg = status.filter(|m| !m.is_empty())?;
    let line = format!("   {}", msg);
    Some(match phase {
        Phase::Failed => line.red().to_string(),
        _ => line.green().to_string(),
    })
}

/// Render the whole page: title, form, status and list.
pub fn render_page<A: EventApi>(desk: &EventDesk<A>) -> String {
    let mut sections = vec![
        "Event Management System".bold().underline().to_string(),
        desk.form().render(),
    ];

    if let Some(status) = render_status(desk.status(), desk.phase()) {
        sections.push(status);
    }

    sections.push(render_event_list(desk.events(), desk.refresh_error()));
    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventdesk_core::{Action, RemoteClient};

    fn event(id: i64, name: &str, venue: &str, capacity: i64) -> Event {
        Event {
            event_id: id,
            event_name: name.to_string(),
            venue: venue.to_string(),
            capacity,
        }
    }

    #[test]
    fn one_card_per_event_with_every_field() {
        let events = vec![
            event(5, "Gala", "Hall A", 100),
            event(6, "Expo", "Pier 9", 1500),
            event(7, "Recital", "Chapel", 80),
        ];

        let cards = render_event_cards(&events);
        assert_eq!(cards.len(), 3);

        for (card, event) in cards.iter().zip(&events) {
            assert!(card.contains(&event.event_id.to_string()));
            assert!(card.contains(&event.event_name));
            assert!(card.contains(&event.venue));
            assert!(card.contains(&event.capacity.to_string()));
        }
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let rendered = render_event_list(&[], None);
        assert!(rendered.contains("No events available"));
        assert!(render_event_cards(&[]).is_empty());
    }

    #[test]
    fn stale_list_is_flagged() {
        let rendered = render_event_list(&[event(1, "Expo", "Pier", 4)], Some("timed out"));
        assert!(rendered.contains("list may be out of date: timed out"));
        assert!(rendered.contains("Expo"));
        assert!(!rendered.contains("No events available"));
    }

    #[test]
    fn status_hidden_when_empty() {
        assert_eq!(render_status(None, Phase::Idle), None);
        assert_eq!(render_status(Some(""), Phase::Idle), None);
        assert!(render_status(Some("Event added"), Phase::Idle).unwrap().contains("Event added"));
        assert!(render_status(None, Phase::Submitting(Action::Delete)).unwrap().contains("Sending delete"));
    }

    #[test]
    fn page_shows_form_values_and_list() {
        let mut desk = EventDesk::new(RemoteClient::new("http://127.0.0.1:1"));
        let ticket = desk.begin_refresh();
        desk.finish_refresh(ticket, Ok(vec![event(5, "Gala", "Hall A", 100)]));
        desk.select_at(0);

        let page = render_page(&desk);
        assert!(page.contains("Event Management System"));
        assert!(page.contains("Event List"));
        assert_eq!(page.matches("Hall A").count(), 2);
    }
}
