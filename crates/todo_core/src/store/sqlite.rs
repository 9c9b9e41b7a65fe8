//! SQLite store.
//!
//! # Responsibility
//! - Persist the collection in the `todos` table, one row per todo.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Connections are accepted only after migrations reached the latest layout.
//! - `save_all` rewrites every row inside one transaction; `position` keeps
//!   insertion order.
//! - Read paths reject rows that violate the todo model.

use super::{StoreError, StoreResult, TodoStore};
use crate::db::migrations::latest_version;
use crate::db::{open_db, open_db_in_memory};
use crate::model::todo::Todo;
use log::debug;
use rusqlite::{params, Connection, Row};
use std::path::Path;
use std::sync::Mutex;

const TODO_SELECT_SQL: &str = "SELECT
    id,
    text,
    completed,
    created_at
FROM todos
ORDER BY position ASC";

/// SQLite-backed todo store.
pub struct SqliteTodoStore {
    conn: Mutex<Connection>,
}

impl SqliteTodoStore {
    /// Wraps a connection that was bootstrapped through `db::open_db*`.
    ///
    /// # Errors
    /// - `InvalidData` when the connection's layout version is not the
    ///   latest one, or the `todos` table is missing.
    pub fn try_new(conn: Connection) -> StoreResult<Self> {
        let version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        let expected = latest_version();
        if version != expected {
            return Err(StoreError::InvalidData(format!(
                "connection schema version {version} does not match expected {expected}"
            )));
        }

        let has_table: bool = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'todos'
            );",
            [],
            |row| row.get(0),
        )?;
        if !has_table {
            return Err(StoreError::InvalidData("missing table `todos`".to_string()));
        }

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Opens (and migrates) a database file.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Self::try_new(open_db(path)?)
    }

    pub fn open_in_memory() -> StoreResult<Self> {
        Self::try_new(open_db_in_memory()?)
    }
}

impl TodoStore for SqliteTodoStore {
    fn load_all(&self) -> StoreResult<Vec<Todo>> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| StoreError::Poisoned("sqlite store"))?;

        let mut stmt = conn.prepare(TODO_SELECT_SQL)?;
        let mut rows = stmt.query([])?;
        let mut todos = Vec::new();
        while let Some(row) = rows.next()? {
            todos.push(parse_todo_row(row)?);
        }

        debug!(
            "event=store_load module=store backend=sqlite status=ok count={}",
            todos.len()
        );
        Ok(todos)
    }

    fn save_all(&self, todos: &[Todo]) -> StoreResult<()> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|_| StoreError::Poisoned("sqlite store"))?;

        let tx = conn.transaction()?;
        tx.execute("DELETE FROM todos;", [])?;
        {
            let mut insert = tx.prepare(
                "INSERT INTO todos (id, position, text, completed, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5);",
            )?;
            for (position, todo) in todos.iter().enumerate() {
                insert.execute(params![
                    todo.id.as_str(),
                    position as i64,
                    todo.text.as_str(),
                    bool_to_int(todo.completed),
                    todo.created_at.as_str(),
                ])?;
            }
        }
        tx.commit()?;

        debug!(
            "event=store_save module=store backend=sqlite status=ok count={}",
            todos.len()
        );
        Ok(())
    }
}

fn parse_todo_row(row: &Row<'_>) -> StoreResult<Todo> {
    let id: String = row.get("id")?;
    if id.is_empty() {
        return Err(StoreError::InvalidData("empty id in todos.id".to_string()));
    }

    let completed = match row.get::<_, i64>("completed")? {
        0 => false,
        1 => true,
        other => {
            return Err(StoreError::InvalidData(format!(
                "invalid completed value `{other}` in todos.completed"
            )));
        }
    };

    Ok(Todo {
        id,
        text: row.get("text")?,
        completed,
        created_at: row.get("created_at")?,
    })
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
