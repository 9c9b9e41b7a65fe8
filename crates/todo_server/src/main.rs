//! `todo-server` entry point.
//!
//! # Responsibility
//! - Read configuration from flags and `TODO_*` environment variables.
//! - Initialize logging, open the configured store and serve the router.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::sync::Arc;
use todo_core::{default_log_level, init_logging, open_store, StoreConfig, StoreKind, TodoService};

/// Todo list HTTP service.
#[derive(Debug, Parser)]
#[command(name = "todo-server", version, about, long_about = None)]
struct Cli {
    /// Address to bind.
    #[arg(long, env = "TODO_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to bind.
    #[arg(long, env = "TODO_PORT", default_value_t = 3001)]
    port: u16,

    /// Storage backend (json, sqlite, memory).
    #[arg(long, env = "TODO_STORE", default_value = "json")]
    store: StoreKind,

    /// Backing file; defaults to data/todos.json or data/todos.sqlite3.
    #[arg(long, env = "TODO_DATA_PATH", value_name = "FILE")]
    data_path: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, env = "TODO_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; stderr when unset.
    #[arg(long, env = "TODO_LOG_DIR", value_name = "DIR")]
    log_dir: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    init_logging(level, cli.log_dir.as_deref()).map_err(anyhow::Error::msg)?;

    let config = StoreConfig::new(cli.store, cli.data_path);
    let store = open_store(&config).context("failed to open todo store")?;
    let app = todo_server::router(Arc::new(TodoService::new(store)));

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", cli.host, cli.port))?;
    info!(
        "event=server_start module=server status=ok addr={}",
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    info!("event=server_stop module=server status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("event=signal_listen module=server status=error error={err}");
        std::future::pending::<()>().await;
    }
}
