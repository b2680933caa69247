pub mod add;
pub mod delete;
pub mod list;
pub mod session;
pub mod update;

use anyhow::Result;
use eventdesk_core::{Alert, EventApi, EventDesk};
use owo_colors::OwoColorize;

use crate::render::render_event_list;

/// Report the outcome of a one-shot mutation and show the refreshed list.
fn finish<A: EventApi>(desk: &EventDesk<A>, outcome: Result<bool, Alert>) -> Result<()> {
    let status = desk.status().unwrap_or_default();

    match outcome {
        Err(alert) => anyhow::bail!("{}", alert),
        Ok(false) => anyhow::bail!("{}", status),
        Ok(true) => {
            if !status.is_empty() {
                println!("{}", status.green());
            }
            println!();
            println!("{}", render_event_list(desk.events(), desk.refresh_error()));
            Ok(())
        }
    }
}
