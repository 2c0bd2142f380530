//! Todo repository trait.
//!
//! One method per query shape. The trait abstracts over storage so handlers
//! can run against PostgreSQL in production and the in-memory repository in
//! tests. Methods return `impl Future + Send` so generic callers (the axum
//! handlers) keep sendable futures.

use crate::error::Result;
use crate::todo::{NewTodo, Todo, TodoUpdate};
use std::future::Future;

/// Data access for todo items.
pub trait TodoRepository: Send + Sync {
    /// All todos, in unspecified order.
    ///
    /// # Errors
    ///
    /// Returns error if the database query fails.
    fn all(&self) -> impl Future<Output = Result<Vec<Todo>>> + Send;

    /// All todos, newest first (`created_at` descending, ties broken by
    /// `id` descending so the order is stable).
    ///
    /// # Errors
    ///
    /// Returns error if the database query fails.
    fn all_newest_first(&self) -> impl Future<Output = Result<Vec<Todo>>> + Send;

    /// Fetch a single todo by id.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Database query fails
    /// - No row matches → `TodoError::NotFound`
    fn find_by_id(&self, id: i64) -> impl Future<Output = Result<Todo>> + Send;

    /// Insert a new todo and return the persisted row, server-assigned id
    /// and timestamps included. `completed` starts false and both
    /// timestamps carry the same creation instant.
    ///
    /// # Errors
    ///
    /// Returns error if the insert fails.
    fn insert(&self, draft: NewTodo) -> impl Future<Output = Result<Todo>> + Send;

    /// Overwrite title, description, and completion flag of an existing
    /// todo, refreshing `updated_at`. There is no partial-update form.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Database query fails
    /// - The id does not exist → `TodoError::NotFound`
    fn update(&self, id: i64, update: TodoUpdate) -> impl Future<Output = Result<Todo>> + Send;

    /// Delete a todo by id. Deleting an absent id is not an error; the
    /// operation reports success either way.
    ///
    /// # Errors
    ///
    /// Returns error if the delete statement fails.
    fn delete_by_id(&self, id: i64) -> impl Future<Output = Result<()>> + Send;

    /// Delete every todo.
    ///
    /// # Errors
    ///
    /// Returns error if the delete statement fails.
    fn delete_all(&self) -> impl Future<Output = Result<()>> + Send;

    /// All todos whose `completed` flag equals the argument, in unspecified
    /// order.
    ///
    /// # Errors
    ///
    /// Returns error if the database query fails.
    fn by_completed(&self, completed: bool) -> impl Future<Output = Result<Vec<Todo>>> + Send;

    /// All todos whose title contains `keyword`, matched case-insensitively,
    /// in unspecified order. The keyword is a literal substring; it carries
    /// no wildcard semantics.
    ///
    /// # Errors
    ///
    /// Returns error if the database query fails.
    fn with_title_containing(&self, keyword: &str)
        -> impl Future<Output = Result<Vec<Todo>>> + Send;

    /// Number of completed todos.
    ///
    /// No endpoint exposes the counts today; they are part of the
    /// repository contract.
    ///
    /// # Errors
    ///
    /// Returns error if the database query fails.
    fn count_completed(&self) -> impl Future<Output = Result<i64>> + Send;

    /// Number of pending (not completed) todos.
    ///
    /// # Errors
    ///
    /// Returns error if the database query fails.
    fn count_pending(&self) -> impl Future<Output = Result<i64>> + Send;
}
