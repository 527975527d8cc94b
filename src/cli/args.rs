//! CLI argument definitions using clap
//!
//! Commands:
//! - stockroom serve [--config <path>]
//! - stockroom list [--search <term>]
//! - stockroom show <id>
//! - stockroom add --name <n> --quantity <q> --price <p>
//! - stockroom update <id> [--name <n>] [--quantity <q>] [--price <p>]
//! - stockroom delete <id> [--yes]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::client::DEFAULT_SERVER_URL;

/// Stockroom - inventory tracking over a small REST API
#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Where the client commands send their requests
#[derive(Args, Debug, Clone)]
pub struct ClientArgs {
    /// Base URL of a running stockroom server
    #[arg(long, env = "STOCKROOM_URL", default_value = DEFAULT_SERVER_URL)]
    pub server: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the API server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,

        /// SQLite database URL
        #[arg(long)]
        database: Option<String>,
    },

    /// List items, optionally filtered by name or id
    List {
        #[command(flatten)]
        client: ClientArgs,

        /// Case-insensitive filter on name or id
        #[arg(long)]
        search: Option<String>,
    },

    /// Show a single item
    Show {
        id: i64,

        #[command(flatten)]
        client: ClientArgs,
    },

    /// Add a new item
    Add {
        #[arg(long)]
        name: String,

        #[arg(long, allow_negative_numbers = true)]
        quantity: i64,

        #[arg(long, allow_negative_numbers = true)]
        price: f64,

        #[command(flatten)]
        client: ClientArgs,
    },

    /// Replace an item's fields. Omitted fields keep their current value.
    Update {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long, allow_negative_numbers = true)]
        quantity: Option<i64>,

        #[arg(long, allow_negative_numbers = true)]
        price: Option<f64>,

        #[command(flatten)]
        client: ClientArgs,
    },

    /// Delete an item after confirmation
    Delete {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,

        #[command(flatten)]
        client: ClientArgs,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
