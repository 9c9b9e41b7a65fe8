//! Persistence gateway contract and its backends.
//!
//! # Responsibility
//! - Define the whole-collection load/save contract used by the service.
//! - Keep file and SQLite details behind that contract.
//!
//! # Invariants
//! - `load_all` returns todos in insertion order, or an empty collection
//!   when nothing was persisted yet.
//! - `save_all` replaces the full persisted collection atomically.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::todo::Todo;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub mod json_file;
pub mod memory;
pub mod sqlite;

pub type StoreResult<T> = Result<T, StoreError>;

/// Boxed store handle used when the backend is picked at runtime.
pub type DynTodoStore = Box<dyn TodoStore + Send + Sync>;

/// Failure of a load or save against the backing store.
#[derive(Debug)]
pub enum StoreError {
    /// Backing file could not be read or written.
    Io(std::io::Error),
    /// Backing file exists but does not hold a todo collection.
    Corrupt(serde_json::Error),
    /// Collection could not be encoded for writing.
    Encode(serde_json::Error),
    Db(DbError),
    /// Persisted rows violate the todo model.
    InvalidData(String),
    /// A previous holder of the store lock panicked.
    Poisoned(&'static str),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "todo storage i/o failed: {err}"),
            Self::Corrupt(err) => write!(f, "todo storage is corrupt: {err}"),
            Self::Encode(err) => write!(f, "failed to encode todos: {err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted todo data: {message}"),
            Self::Poisoned(store) => write!(f, "{store} lock poisoned"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Corrupt(err) | Self::Encode(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) | Self::Poisoned(_) => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Whole-collection persistence gateway.
pub trait TodoStore {
    /// Loads the full persisted collection.
    fn load_all(&self) -> StoreResult<Vec<Todo>>;
    /// Replaces the full persisted collection.
    fn save_all(&self, todos: &[Todo]) -> StoreResult<()>;
}

impl<S: TodoStore + ?Sized> TodoStore for Box<S> {
    fn load_all(&self) -> StoreResult<Vec<Todo>> {
        (**self).load_all()
    }

    fn save_all(&self, todos: &[Todo]) -> StoreResult<()> {
        (**self).save_all(todos)
    }
}

impl<S: TodoStore + ?Sized> TodoStore for Arc<S> {
    fn load_all(&self) -> StoreResult<Vec<Todo>> {
        (**self).load_all()
    }

    fn save_all(&self, todos: &[Todo]) -> StoreResult<()> {
        (**self).save_all(todos)
    }
}
