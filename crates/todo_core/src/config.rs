//! Store selection shared by the server and CLI binaries.
//!
//! # Responsibility
//! - Parse the store kind named on the command line or in the environment.
//! - Open the matching backend as one boxed store handle.
//!
//! # Invariants
//! - Unknown kinds are rejected, never mapped to a default.
//! - File-backed kinds always resolve to a concrete path.

use crate::store::json_file::JsonFileTodoStore;
use crate::store::memory::MemoryTodoStore;
use crate::store::sqlite::SqliteTodoStore;
use crate::store::{DynTodoStore, StoreResult};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_JSON_PATH: &str = "data/todos.json";
pub const DEFAULT_SQLITE_PATH: &str = "data/todos.sqlite3";

/// Backend that holds the todo collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoreKind {
    #[default]
    Json,
    Sqlite,
    Memory,
}

impl StoreKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Sqlite => "sqlite",
            Self::Memory => "memory",
        }
    }
}

impl Display for StoreKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownStoreKind(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStoreKind(value) => write!(
                f,
                "unsupported store kind `{value}`; expected json|sqlite|memory"
            ),
        }
    }
}

impl Error for ConfigError {}

impl FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "sqlite" | "sqlite3" => Ok(Self::Sqlite),
            "memory" | "mem" => Ok(Self::Memory),
            other => Err(ConfigError::UnknownStoreKind(other.to_string())),
        }
    }
}

/// Which store to open and where.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreConfig {
    pub kind: StoreKind,
    /// Overrides the per-kind default path. Ignored for `memory`.
    pub path: Option<PathBuf>,
}

impl StoreConfig {
    pub fn new(kind: StoreKind, path: Option<PathBuf>) -> Self {
        Self { kind, path }
    }

    /// Effective backing path, `None` for the memory store.
    pub fn resolved_path(&self) -> Option<PathBuf> {
        let default = match self.kind {
            StoreKind::Json => DEFAULT_JSON_PATH,
            StoreKind::Sqlite => DEFAULT_SQLITE_PATH,
            StoreKind::Memory => return None,
        };
        Some(self.path.clone().unwrap_or_else(|| PathBuf::from(default)))
    }
}

/// Opens the store described by `config`.
///
/// # Errors
/// - Returns `StoreError::Db` when the SQLite database cannot be opened or
///   migrated.
pub fn open_store(config: &StoreConfig) -> StoreResult<DynTodoStore> {
    let path = config.resolved_path();
    let store: DynTodoStore = match (config.kind, path.as_ref()) {
        (StoreKind::Json, Some(path)) => Box::new(JsonFileTodoStore::new(path)),
        (StoreKind::Sqlite, Some(path)) => Box::new(SqliteTodoStore::open(path)?),
        _ => Box::new(MemoryTodoStore::new()),
    };

    let shown = path
        .as_ref()
        .map_or_else(|| "-".to_string(), |p| p.display().to_string());
    info!(
        "event=store_open module=config status=ok kind={} path={}",
        config.kind, shown
    );
    Ok(store)
}
