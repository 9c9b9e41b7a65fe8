//! JSON file store.
//!
//! # Responsibility
//! - Persist the collection as one pretty-printed JSON array.
//!
//! # Invariants
//! - A missing file reads as an empty collection.
//! - Loaded ids must be non-empty and unique.
//! - Writes go to a sibling temp file that is renamed over the target, so a
//!   failed save never leaves a half-written collection behind.

use super::{StoreError, StoreResult, TodoStore};
use crate::model::todo::Todo;
use log::{debug, error};
use std::collections::HashSet;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File-backed todo store.
#[derive(Debug, Clone)]
pub struct JsonFileTodoStore {
    path: PathBuf,
}

impl JsonFileTodoStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl TodoStore for JsonFileTodoStore {
    fn load_all(&self) -> StoreResult<Vec<Todo>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("event=store_load module=store backend=json status=empty");
                return Ok(Vec::new());
            }
            Err(err) => {
                error!(
                    "event=store_load module=store backend=json status=error error_code=read_failed error={err}"
                );
                return Err(err.into());
            }
        };

        let todos: Vec<Todo> = serde_json::from_slice(&bytes).map_err(|err| {
            error!(
                "event=store_load module=store backend=json status=error error_code=decode_failed error={err}"
            );
            StoreError::Corrupt(err)
        })?;
        validate_ids(&todos).inspect_err(|err| {
            error!(
                "event=store_load module=store backend=json status=error error_code=invalid_data error={err}"
            );
        })?;
        debug!(
            "event=store_load module=store backend=json status=ok count={}",
            todos.len()
        );
        Ok(todos)
    }

    fn save_all(&self, todos: &[Todo]) -> StoreResult<()> {
        let encoded = serde_json::to_vec_pretty(todos).map_err(StoreError::Encode)?;

        let dir = self.parent_dir();
        std::fs::create_dir_all(dir)?;
        let mut staged = NamedTempFile::new_in(dir)?;
        staged.write_all(&encoded)?;
        staged.as_file().sync_all()?;
        staged.persist(&self.path).map_err(|err| {
            error!(
                "event=store_save module=store backend=json status=error error_code=rename_failed error={}",
                err.error
            );
            StoreError::Io(err.error)
        })?;

        debug!(
            "event=store_save module=store backend=json status=ok count={}",
            todos.len()
        );
        Ok(())
    }
}

fn validate_ids(todos: &[Todo]) -> StoreResult<()> {
    let mut seen = HashSet::with_capacity(todos.len());
    for (index, todo) in todos.iter().enumerate() {
        if todo.id.is_empty() {
            return Err(StoreError::InvalidData(format!("empty id at index {index}")));
        }
        if !seen.insert(todo.id.as_str()) {
            return Err(StoreError::InvalidData(format!(
                "duplicate id `{}` at index {index}",
                todo.id
            )));
        }
    }
    Ok(())
}
