mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use eventdesk_core::{DeskConfig, RemoteClient};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "eventdesk")]
#[command(about = "Add, edit and remove events on a remote event service")]
struct Cli {
    /// Root URL of the events service (overrides config.toml and EVENTDESK_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive form (default)
    Session,
    /// Print every event
    List,
    Add {
        #[arg(long)]
        id: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        venue: String,

        #[arg(long)]
        capacity: String,
    },
    /// Update an event; fields not given keep their current value
    Update {
        #[arg(long)]
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        venue: Option<String>,

        #[arg(long)]
        capacity: Option<String>,
    },
    Delete {
        #[arg(long)]
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let client = connect(cli.base_url)?;

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => commands::session::run(client).await,
        Commands::List => commands::list::run(client).await,
        Commands::Add {
            id,
            name,
            venue,
            capacity,
        } => commands::add::run(client, id, name, venue, capacity).await,
        Commands::Update {
            id,
            name,
            venue,
            capacity,
        } => commands::update::run(client, id, name, venue, capacity).await,
        Commands::Delete { id } => commands::delete::run(client, id).await,
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn connect(base_url: Option<String>) -> Result<RemoteClient> {
    let mut config = DeskConfig::load()?;

    if let Some(url) = base_url {
        config = config.with_base_url(url)?;
    }

    tracing::debug!(base_url = %config.base_url, "using events service");
    Ok(RemoteClient::from_config(&config)?)
}
