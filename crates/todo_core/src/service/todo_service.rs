//! Todo use-case service.
//!
//! # Responsibility
//! - Provide the list/create/toggle/remove entry points for adapters.
//! - Run every operation as one load, one in-memory mutation and at most
//!   one save against the injected store.
//!
//! # Invariants
//! - The collection is never cached between calls; the store is the only
//!   source of truth.
//! - `toggle_complete` on an unknown id performs no save.
//! - `remove` always saves and always reports success.
//! - Log events carry ids and counts only, never todo text.

use crate::model::todo::{RemoveOutcome, Todo};
use crate::store::{StoreResult, TodoStore};
use log::{error, info};

/// Use-case service over a todo store.
pub struct TodoService<S: TodoStore> {
    store: S,
}

impl<S: TodoStore> TodoService<S> {
    /// Creates a service using the provided store handle.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrows the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the full collection exactly as the store loaded it.
    pub fn list_all(&self) -> StoreResult<Vec<Todo>> {
        let todos = self.store.load_all().inspect_err(|err| {
            error!("event=todo_list module=service status=error error={err}");
        })?;
        info!(
            "event=todo_list module=service status=ok count={}",
            todos.len()
        );
        Ok(todos)
    }

    /// Appends a new open todo and persists the collection.
    ///
    /// # Contract
    /// - `text` is stored verbatim; no emptiness check happens here.
    /// - Returns the created todo.
    pub fn create(&self, text: impl Into<String>) -> StoreResult<Todo> {
        let mut todos = self.store.load_all()?;
        let todo = Todo::new(text);
        todos.push(todo.clone());
        self.save(&todos, "todo_create")?;

        info!(
            "event=todo_create module=service status=ok id={} count={}",
            todo.id,
            todos.len()
        );
        Ok(todo)
    }

    /// Flips `completed` on the todo with `id`.
    ///
    /// Returns `Ok(None)` without touching the store when no todo matches.
    pub fn toggle_complete(&self, id: &str) -> StoreResult<Option<Todo>> {
        let mut todos = self.store.load_all()?;
        let Some(todo) = todos.iter_mut().find(|todo| todo.id == id) else {
            info!("event=todo_toggle module=service status=not_found id={id}");
            return Ok(None);
        };
        todo.toggle();
        let updated = todo.clone();
        self.save(&todos, "todo_toggle")?;

        info!(
            "event=todo_toggle module=service status=ok id={} completed={}",
            updated.id, updated.completed
        );
        Ok(Some(updated))
    }

    /// Drops every todo with `id` and persists the remainder.
    ///
    /// Removing an unknown id is not an error; the collection is saved
    /// unchanged and success is reported.
    pub fn remove(&self, id: &str) -> StoreResult<RemoveOutcome> {
        let todos = self.store.load_all()?;
        let before = todos.len();
        let remaining: Vec<Todo> = todos.into_iter().filter(|todo| todo.id != id).collect();
        self.save(&remaining, "todo_remove")?;

        info!(
            "event=todo_remove module=service status=ok id={} removed={}",
            id,
            before - remaining.len()
        );
        Ok(RemoveOutcome::succeeded())
    }

    fn save(&self, todos: &[Todo], event: &str) -> StoreResult<()> {
        self.store.save_all(todos).inspect_err(|err| {
            error!("event={event} module=service status=error error_code=save_failed error={err}");
        })
    }
}
