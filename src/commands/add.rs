use anyhow::Result;
use eventdesk_core::{EventDesk, Field, RemoteClient};

use crate::utils::tui::create_spinner;

pub async fn run(
    client: RemoteClient,
    id: String,
    name: String,
    venue: String,
    capacity: String,
) -> Result<()> {
    let mut desk = EventDesk::new(client);
    desk.set_field(Field::EventId, id);
    desk.set_field(Field::EventName, name);
    desk.set_field(Field::Venue, venue);
    desk.set_field(Field::Capacity, capacity);

    let spinner = create_spinner("Adding event".to_string());
    let outcome = desk.create().await;
    spinner.finish_and_clear();

    super::finish(&desk, outcome)
}
