use anyhow::Result;
use eventdesk_core::{EventDesk, Field, RemoteClient};

use crate::utils::tui::create_spinner;

/// Start from the stored record (when it is listed), apply the given overrides, then update.
pub async fn run(
    client: RemoteClient,
    id: String,
    name: Option<String>,
    venue: Option<String>,
    capacity: Option<String>,
) -> Result<()> {
    let spinner = create_spinner("Loading events".to_string());
    let mut desk = EventDesk::mount(client).await;
    spinner.finish_and_clear();

    let current = id
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|event_id| desk.find(event_id).cloned());

    match current {
        Some(event) => desk.select(&event),
        None => desk.set_field(Field::EventId, id),
    }

    let overrides = [
        (Field::EventName, name),
        (Field::Venue, venue),
        (Field::Capacity, capacity),
    ];
    for (field, value) in overrides {
        if let Some(value) = value {
            desk.set_field(field, value);
        }
    }

    let spinner = create_spinner("Updating event".to_string());
    let outcome = desk.update().await;
    spinner.finish_and_clear();

    super::finish(&desk, outcome)
}
