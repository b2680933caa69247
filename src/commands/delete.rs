use anyhow::Result;
use eventdesk_core::{EventDesk, Field, RemoteClient};

use crate::utils::tui::create_spinner;

pub async fn run(client: RemoteClient, id: String) -> Result<()> {
    let mut desk = EventDesk::new(client);
    desk.set_field(Field::EventId, id);

    let spinner = create_spinner("Deleting event".to_string());
    let outcome = desk.delete().await;
    spinner.finish_and_clear();

    super::finish(&desk, outcome)
}
