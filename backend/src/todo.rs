//! The todo entity and its write shapes.
//!
//! `Todo` is the persisted record; `NewTodo` and `TodoUpdate` are the two
//! write shapes the repository accepts. The wire format is camelCase JSON
//! (`createdAt`, `updatedAt`) to match the front-end client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted todo item.
///
/// The database assigns `id` and both timestamps on insert; `created_at`
/// never changes afterwards, `updated_at` is refreshed on every update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique identifier, assigned by the database on insert.
    pub id: i64,
    /// Short title of the task.
    pub title: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Whether the task has been completed.
    pub completed: bool,
    /// When the todo was created. Immutable after insert.
    pub created_at: DateTime<Utc>,
    /// When the todo was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Draft for a todo that has not been persisted yet.
///
/// The repository completes the draft on insert: `completed` starts false
/// and a single timestamp is stamped for both `created_at` and `updated_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    /// Short title of the task.
    pub title: String,
    /// Optional longer description.
    pub description: Option<String>,
}

impl NewTodo {
    /// Create a draft from a title and an optional description.
    #[must_use]
    pub const fn new(title: String, description: Option<String>) -> Self {
        Self { title, description }
    }
}

/// Wholesale replacement of a todo's mutable fields.
///
/// Applied by the update operation: all three fields overwrite the stored
/// row, there is no partial-update form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoUpdate {
    /// New title.
    pub title: String,
    /// New description (`None` clears the stored one).
    pub description: Option<String>,
    /// New completion flag.
    pub completed: bool,
}
