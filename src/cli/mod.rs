//! CLI module for Stockroom
//!
//! Provides command-line interface for:
//! - serve: run the API server until interrupted
//! - list / show: read items from a running server
//! - add / update / delete: mutate items through the client dashboard

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, ClientArgs, Command};
pub use commands::{resolve_server_config, run, run_command};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{confirm, write_output};
