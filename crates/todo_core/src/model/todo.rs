//! Todo domain model.
//!
//! # Responsibility
//! - Define the single entity persisted by every store backend.
//! - Own id and creation-timestamp generation for new entries.
//!
//! # Invariants
//! - `id` is assigned once and never reused for another todo.
//! - `text` and `created_at` never change after construction.
//! - New todos always start with `completed == false`.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of a todo.
///
/// Kept as plain text because persisted collections may carry ids that were
/// not generated by this crate.
pub type TodoId = String;

/// One entry of the todo collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Stable unique id inside the collection.
    pub id: TodoId,
    /// Display text, fixed at creation.
    pub text: String,
    /// Completion flag, flipped by toggling.
    pub completed: bool,
    /// RFC 3339 UTC timestamp captured at creation.
    pub created_at: String,
}

impl Todo {
    /// Creates a new open todo with a generated id and the current time.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), text, now_timestamp())
    }

    /// Creates a todo from already-known identity and timestamp.
    ///
    /// Used by store backends and tests that rebuild persisted entries.
    pub fn with_id(
        id: impl Into<TodoId>,
        text: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed: false,
            created_at: created_at.into(),
        }
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Result of a remove request.
///
/// Removal never reports a miss, so `success` is always `true` when the
/// surrounding call returns `Ok`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveOutcome {
    pub success: bool,
}

impl RemoveOutcome {
    pub fn succeeded() -> Self {
        Self { success: true }
    }
}

/// Current UTC time with millisecond precision, e.g. `2024-01-01T10:00:00.000Z`.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
