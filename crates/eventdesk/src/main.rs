mod commands;
mod config;
mod render;
mod seed;
mod session;
mod storage;
mod store;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use crate::commands::{EventArgs, ListArgs};
use crate::config::Config;
use crate::session::SessionStore;
use crate::storage::FileStorage;
use crate::store::EventStore;

/// Eventdesk - manage your events from the terminal
#[derive(Parser, Debug)]
#[command(name = "eventdesk")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding the durable records
    #[arg(long, env = "EVENTDESK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in; a fresh collection is seeded with demo events
    Login {
        /// Display name
        #[arg(long)]
        name: String,
        /// Email address
        #[arg(long)]
        email: String,
    },
    /// Sign out and clear the local collection
    Logout,
    /// Create a new event
    Add(EventArgs),
    /// Replace an existing event
    Edit {
        /// Id of the event to replace
        id: Uuid,
        #[command(flatten)]
        args: EventArgs,
    },
    /// Delete an event
    Delete {
        /// Id of the event to delete
        id: Uuid,
    },
    /// Show one event in full
    Show {
        /// Id of the event to show
        id: Uuid,
    },
    /// List events with filters, sorting, and pagination
    List(ListArgs),
    /// Show free slots for a day or a date range
    Slots {
        /// First day (YYYY-MM-DD)
        #[arg(long)]
        from: NaiveDate,
        /// Last day, inclusive; defaults to --from
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Append the demo events to the collection
    Seed,
    /// Re-read the collection from storage after an external change
    Reload,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eventdesk=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env();
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    tracing::debug!(data_dir = %config.data_dir.display(), "opening data directory");

    let mut store = EventStore::load(Box::new(FileStorage::new(&config.data_dir)));
    let mut session = SessionStore::load(Box::new(FileStorage::new(&config.data_dir)));

    match cli.command {
        Command::Login { name, email } => commands::login(&mut store, &mut session, name, email),
        Command::Logout => commands::logout(&mut store, &mut session),
        Command::Add(args) => commands::add(&mut store, &session, args),
        Command::Edit { id, args } => commands::edit(&mut store, id, args),
        Command::Delete { id } => commands::delete(&mut store, id),
        Command::Show { id } => commands::show(&store, id),
        Command::List(args) => commands::list(&store, &config, args),
        Command::Slots { from, to } => commands::slots(&store, from, to),
        Command::Seed => commands::seed(&mut store, &session),
        Command::Reload => {
            store.reload();
            println!("Reloaded {} event(s) from storage.", store.len());
            Ok(())
        }
    }
}
