use anyhow::Result;
use eventdesk_core::{EventDesk, RemoteClient};

use crate::render::render_event_list;
use crate::utils::tui::create_spinner;

pub async fn run(client: RemoteClient) -> Result<()> {
    let spinner = create_spinner("Loading events".to_string());
    let desk = EventDesk::mount(client).await;
    spinner.finish_and_clear();

    if let Some(error) = desk.refresh_error() {
        anyhow::bail!("Could not load events: {}", error);
    }

    println!("{}", render_event_list(desk.events(), None));
    Ok(())
}
