//! CLI command implementations
//!
//! `serve` boots the store and the HTTP server. Every other command is a
//! thin client: it drives a [`Dashboard`] against a running server, so the
//! same validation, notification and reload rules apply as in any other
//! front end.

use std::future::Future;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::client::{render_item, ApiClient, ConsoleNotifier, Dashboard, ItemForm};
use crate::http_server::{HttpServer, ServerConfig};
use crate::logging::init_tracing;
use crate::store::ItemStore;

use super::args::{ClientArgs, Command};
use super::errors::{CliError, CliResult};
use super::io::{confirm, write_output};

/// Main CLI entry point
///
/// Loads `.env`, installs tracing, parses arguments and dispatches.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            host,
            port,
            database,
        } => serve(resolve_server_config(config, host, port, database)?),
        Command::List { client, search } => block_on(list(client, search)),
        Command::Show { id, client } => block_on(show(id, client)),
        Command::Add {
            name,
            quantity,
            price,
            client,
        } => block_on(add(ItemForm::new(name, quantity, price), client)),
        Command::Update {
            id,
            name,
            quantity,
            price,
            client,
        } => block_on(update(id, name, quantity, price, client)),
        Command::Delete { id, yes, client } => block_on(delete(id, yes, client)),
    }
}

/// Resolve server configuration: defaults, then the optional config file,
/// then `HOST` / `PORT` / `DATABASE_URL`, then command-line flags.
pub fn resolve_server_config(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
    database: Option<String>,
) -> CliResult<ServerConfig> {
    let config = match config_path.as_deref() {
        Some(path) => load_config_file(path)?,
        None => ServerConfig::default(),
    };

    let mut config = config.apply_env()?;
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(database) = database {
        config.database_url = database;
    }
    Ok(config)
}

fn load_config_file(path: &Path) -> CliResult<ServerConfig> {
    let config = ServerConfig::load(path)?;
    info!(path = %path.display(), "configuration loaded");
    Ok(config)
}

fn block_on<F>(future: F) -> CliResult<()>
where
    F: Future<Output = CliResult<()>>,
{
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;
    rt.block_on(future)
}

fn dashboard(client: &ClientArgs) -> Dashboard {
    Dashboard::new(ApiClient::new(&client.server), ConsoleNotifier)
}

/// Open the store and serve the API until interrupted.
///
/// The store connection is closed before returning.
pub fn serve(config: ServerConfig) -> CliResult<()> {
    block_on(async move {
        let store = ItemStore::connect(&config.database_url).await?;
        let server = HttpServer::new(config, store);

        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

async fn list(client: ClientArgs, search: Option<String>) -> CliResult<()> {
    let mut dashboard = dashboard(&client);
    if !dashboard.load().await {
        return Err(CliError::command_failed(format!(
            "Could not load items from {}",
            client.server
        )));
    }

    if let Some(term) = search {
        dashboard.search(&term);
    }
    write_output(dashboard.view())
}

async fn show(id: i64, client: ClientArgs) -> CliResult<()> {
    let item = ApiClient::new(&client.server)
        .get_item(id)
        .await
        .map_err(|e| CliError::command_failed(e.to_string()))?;
    write_output(&render_item(&item))
}

async fn add(form: ItemForm, client: ClientArgs) -> CliResult<()> {
    let mut dashboard = dashboard(&client);
    *dashboard.form_mut() = form;

    if !dashboard.submit().await {
        return Err(CliError::command_failed("Item was not created"));
    }
    Ok(())
}

async fn update(
    id: i64,
    name: Option<String>,
    quantity: Option<i64>,
    price: Option<f64>,
    client: ClientArgs,
) -> CliResult<()> {
    let mut dashboard = dashboard(&client);
    if !dashboard.edit(id).await {
        return Err(CliError::command_failed(format!(
            "Item #{} could not be loaded",
            id
        )));
    }

    let form = dashboard.form_mut();
    if let Some(name) = name {
        form.name = name;
    }
    if let Some(quantity) = quantity {
        form.quantity = quantity;
    }
    if let Some(price) = price {
        form.price = price;
    }

    if !dashboard.submit().await {
        return Err(CliError::command_failed(format!(
            "Item #{} was not updated",
            id
        )));
    }
    Ok(())
}

async fn delete(id: i64, yes: bool, client: ClientArgs) -> CliResult<()> {
    let mut dashboard = dashboard(&client);
    if !dashboard.load().await {
        return Err(CliError::command_failed(format!(
            "Could not load items from {}",
            client.server
        )));
    }

    if !dashboard.request_delete(id) {
        return Err(CliError::command_failed(format!("Item #{} not found", id)));
    }

    if !yes && !confirm(&format!("Delete item #{}?", id))? {
        dashboard.cancel_delete();
        return write_output("Deletion cancelled");
    }

    if !dashboard.confirm_delete().await {
        return Err(CliError::command_failed(format!(
            "Item #{} was not deleted",
            id
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"host": "127.0.0.1", "port": 4000}}"#).unwrap();

        let config = resolve_server_config(
            Some(file.path().to_path_buf()),
            None,
            Some(5000),
            Some("sqlite::memory:".to_string()),
        )
        .unwrap();

        assert_eq!(config.port, 5000);
        assert_eq!(config.database_url, "sqlite::memory:");
    }

    #[test]
    fn test_missing_config_file_is_config_error() {
        let err = resolve_server_config(
            Some(PathBuf::from("/nonexistent/stockroom.json")),
            None,
            None,
            None,
        )
        .unwrap_err();
        assert_eq!(err.code(), super::super::errors::CliErrorCode::ConfigError);
    }
}
