//! PostgreSQL todo repository implementation.
//!
//! Persistent storage for todo items on a single `todos` table. Queries are
//! plain SQL executed through sqlx; every finder of [`TodoRepository`] maps
//! to exactly one statement.
//!
//! # Example
//!
//! ```no_run
//! use todo_backend::stores::PostgresTodoRepository;
//! use sqlx::PgPool;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = PgPool::connect("postgresql://localhost/todos").await?;
//! let repository = PostgresTodoRepository::new(pool);
//! repository.migrate().await?;
//! # Ok(())
//! # }
//! ```

use crate::error::{Result, TodoError};
use crate::repository::TodoRepository;
use crate::todo::{NewTodo, Todo, TodoUpdate};
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

const TODO_COLUMNS: &str = "id, title, description, completed, created_at, updated_at";

/// PostgreSQL todo repository.
#[derive(Clone)]
pub struct PostgresTodoRepository {
    /// PostgreSQL connection pool.
    pool: PgPool,
}

impl PostgresTodoRepository {
    /// Create a new PostgreSQL todo repository.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run database migrations.
    ///
    /// # Errors
    ///
    /// Returns error if migrations fail.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| TodoError::Database(format!("Migration failed: {e}")))?;
        Ok(())
    }

    fn row_to_todo(row: &PgRow) -> Todo {
        Todo {
            id: row.get("id"),
            title: row.get("title"),
            description: row.get("description"),
            completed: row.get("completed"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }
}

/// Escape LIKE wildcards so a keyword matches as a literal substring.
///
/// PostgreSQL treats backslash as the default LIKE escape character, so
/// escaping `\`, `%`, and `_` is enough.
fn escape_like(keyword: &str) -> String {
    keyword
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

impl TodoRepository for PostgresTodoRepository {
    async fn all(&self) -> Result<Vec<Todo>> {
        let rows = sqlx::query(&format!("SELECT {TODO_COLUMNS} FROM todos"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| TodoError::Database(format!("Failed to list todos: {e}")))?;

        Ok(rows.iter().map(Self::row_to_todo).collect())
    }

    async fn all_newest_first(&self) -> Result<Vec<Todo>> {
        let rows = sqlx::query(&format!(
            "SELECT {TODO_COLUMNS} FROM todos ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TodoError::Database(format!("Failed to list todos: {e}")))?;

        Ok(rows.iter().map(Self::row_to_todo).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Todo> {
        let row = sqlx::query(&format!("SELECT {TODO_COLUMNS} FROM todos WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| TodoError::Database(format!("Failed to get todo: {e}")))?
            .ok_or(TodoError::NotFound)?;

        Ok(Self::row_to_todo(&row))
    }

    async fn insert(&self, draft: NewTodo) -> Result<Todo> {
        // One timestamp for both columns keeps created_at == updated_at
        // observable at creation time.
        let now = Utc::now();

        let row = sqlx::query(&format!(
            r"
            INSERT INTO todos (title, description, completed, created_at, updated_at)
            VALUES ($1, $2, FALSE, $3, $3)
            RETURNING {TODO_COLUMNS}
            ",
        ))
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| TodoError::Database(format!("Failed to create todo: {e}")))?;

        let todo = Self::row_to_todo(&row);

        tracing::info!(todo_id = todo.id, "Todo created");
        metrics::counter!("todos.created").increment(1);

        Ok(todo)
    }

    async fn update(&self, id: i64, update: TodoUpdate) -> Result<Todo> {
        let row = sqlx::query(&format!(
            r"
            UPDATE todos
            SET title = $2,
                description = $3,
                completed = $4,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {TODO_COLUMNS}
            ",
        ))
        .bind(id)
        .bind(&update.title)
        .bind(&update.description)
        .bind(update.completed)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TodoError::Database(format!("Failed to update todo: {e}")))?
        .ok_or(TodoError::NotFound)?;

        let todo = Self::row_to_todo(&row);

        tracing::info!(todo_id = todo.id, completed = todo.completed, "Todo updated");
        metrics::counter!("todos.updated").increment(1);

        Ok(todo)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        // Absence is tolerated: 0 rows affected is still success.
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| TodoError::Database(format!("Failed to delete todo: {e}")))?;

        tracing::debug!(todo_id = id, rows = result.rows_affected(), "Todo delete");
        metrics::counter!("todos.deleted").increment(result.rows_affected());

        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        let result = sqlx::query("DELETE FROM todos")
            .execute(&self.pool)
            .await
            .map_err(|e| TodoError::Database(format!("Failed to delete todos: {e}")))?;

        tracing::info!(rows = result.rows_affected(), "All todos deleted");
        metrics::counter!("todos.cleared").increment(1);

        Ok(())
    }

    async fn by_completed(&self, completed: bool) -> Result<Vec<Todo>> {
        let rows = sqlx::query(&format!(
            "SELECT {TODO_COLUMNS} FROM todos WHERE completed = $1"
        ))
        .bind(completed)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TodoError::Database(format!("Failed to filter todos: {e}")))?;

        Ok(rows.iter().map(Self::row_to_todo).collect())
    }

    async fn with_title_containing(&self, keyword: &str) -> Result<Vec<Todo>> {
        let pattern = format!("%{}%", escape_like(keyword));

        let rows = sqlx::query(&format!(
            "SELECT {TODO_COLUMNS} FROM todos WHERE title ILIKE $1"
        ))
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TodoError::Database(format!("Failed to search todos: {e}")))?;

        Ok(rows.iter().map(Self::row_to_todo).collect())
    }

    async fn count_completed(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM todos WHERE completed")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| TodoError::Database(format!("Failed to count todos: {e}")))?;

        Ok(count)
    }

    async fn count_pending(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM todos WHERE NOT completed")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| TodoError::Database(format!("Failed to count todos: {e}")))?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_passes_plain_keywords_through() {
        assert_eq!(escape_like("milk"), "milk");
    }

    #[test]
    fn escape_like_neutralizes_wildcards() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn escape_like_handles_mixed_input() {
        assert_eq!(escape_like("%_\\"), "\\%\\_\\\\");
    }
}
