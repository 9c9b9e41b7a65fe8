//! Core domain logic for the todo service.
//! This crate is the single source of truth for todo invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use config::{open_store, ConfigError, StoreConfig, StoreKind};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{RemoveOutcome, Todo, TodoId};
pub use service::todo_service::TodoService;
pub use store::json_file::JsonFileTodoStore;
pub use store::memory::MemoryTodoStore;
pub use store::sqlite::SqliteTodoStore;
pub use store::{DynTodoStore, StoreError, StoreResult, TodoStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
