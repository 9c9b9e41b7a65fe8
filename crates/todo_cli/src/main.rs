//! `todo` command-line client.
//!
//! # Responsibility
//! - Run one todo operation against a local store and print the result.
//! - Share store selection flags and env vars with `todo-server`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use todo_core::{
    init_logging, open_store, StoreConfig, StoreKind, Todo, TodoService, TodoStore,
};

/// Manage a local todo list.
#[derive(Debug, Parser)]
#[command(name = "todo", version, about, long_about = None)]
struct Cli {
    /// Storage backend (json, sqlite, memory).
    #[arg(long, global = true, env = "TODO_STORE", default_value = "json")]
    store: StoreKind,

    /// Backing file; defaults to data/todos.json or data/todos.sqlite3.
    #[arg(long, global = true, env = "TODO_DATA_PATH", value_name = "FILE")]
    data_path: Option<PathBuf>,

    /// Log level for diagnostics written to stderr.
    #[arg(long, global = true, env = "TODO_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every todo in insertion order.
    List,
    /// Add a new open todo.
    Add {
        /// Todo text.
        text: String,
    },
    /// Flip completion of a todo.
    Toggle {
        /// Todo id as printed by `list`.
        id: String,
    },
    /// Remove a todo; unknown ids are ignored.
    Remove {
        /// Todo id as printed by `list`.
        id: String,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, None).map_err(anyhow::Error::msg)?;

    let config = StoreConfig::new(cli.store, cli.data_path);
    let service = TodoService::new(open_store(&config).context("failed to open todo store")?);

    let stdout = std::io::stdout();
    run(cli.command, &service, &mut stdout.lock())
}

/// Executes one subcommand, writing results to `out`.
///
/// A toggle of an unknown id reports on stderr and yields `ExitCode::FAILURE`
/// without touching the store.
fn run<S: TodoStore>(
    command: Command,
    service: &TodoService<S>,
    out: &mut impl Write,
) -> Result<ExitCode> {
    match command {
        Command::List => {
            for todo in service.list_all()? {
                writeln!(out, "{}", render(&todo))?;
            }
        }
        Command::Add { text } => {
            let todo = service.create(text)?;
            writeln!(out, "{}", render(&todo))?;
        }
        Command::Toggle { id } => match service.toggle_complete(&id)? {
            Some(todo) => writeln!(out, "{}", render(&todo))?,
            None => {
                eprintln!("no todo with id `{id}`");
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Remove { id } => {
            service.remove(&id)?;
            writeln!(out, "removed {id}")?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn render(todo: &Todo) -> String {
    let mark = if todo.completed { 'x' } else { ' ' };
    format!("[{mark}] {} {}", todo.id, todo.text)
}
