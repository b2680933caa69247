use anyhow::Result;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

pub fn create_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_strings(&["-", "\\", "|", "/"])
        .template("{msg} {spinner}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(message);
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

/// Show a message and block until the user acknowledges it.
pub fn alert(message: &str) -> Result<()> {
    eprintln!();
    eprintln!("  {} {}", "!".red().bold(), message.red().bold());
    Input::<String>::new()
        .with_prompt("  Press Enter to continue")
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}
