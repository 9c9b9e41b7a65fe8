//! Process-local store.
//!
//! Holds the collection in a mutex-guarded vector and counts saves, which
//! lets callers observe whether an operation wrote at all.

use super::{StoreError, StoreResult, TodoStore};
use crate::model::todo::Todo;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory todo store. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryTodoStore {
    todos: Mutex<Vec<Todo>>,
    saves: AtomicUsize,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `todos`.
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos: Mutex::new(todos),
            saves: AtomicUsize::new(0),
        }
    }

    /// Number of completed `save_all` calls.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Current contents without going through `load_all`.
    pub fn snapshot(&self) -> Vec<Todo> {
        match self.todos.lock() {
            Ok(todos) => todos.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl TodoStore for MemoryTodoStore {
    fn load_all(&self) -> StoreResult<Vec<Todo>> {
        let todos = self
            .todos
            .lock()
            .map_err(|_| StoreError::Poisoned("memory store"))?;
        Ok(todos.clone())
    }

    fn save_all(&self, todos: &[Todo]) -> StoreResult<()> {
        let mut current = self
            .todos
            .lock()
            .map_err(|_| StoreError::Poisoned("memory store"))?;
        *current = todos.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
