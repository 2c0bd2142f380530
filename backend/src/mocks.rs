//! Mock todo repository for testing.
//!
//! In-memory implementation of [`TodoRepository`] with the same observable
//! contract as the PostgreSQL store: sequential ids, a single creation
//! instant for both timestamps, absence-tolerant deletes.

use crate::error::{Result, TodoError};
use crate::repository::TodoRepository;
use crate::todo::{NewTodo, Todo, TodoUpdate};
use chrono::Utc;
use std::collections::BTreeMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

/// Mock todo repository.
///
/// Uses in-memory storage for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    todos: BTreeMap<i64, Todo>,
    next_id: i64,
}

impl InMemoryTodoRepository {
    /// Create a new, empty mock repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> TodoError {
    TodoError::Database("Mock repository lock poisoned".to_string())
}

impl TodoRepository for InMemoryTodoRepository {
    fn all(&self) -> impl Future<Output = Result<Vec<Todo>>> + Send {
        let inner = Arc::clone(&self.inner);

        async move {
            let guard = inner.lock().map_err(|_| poisoned())?;
            Ok(guard.todos.values().cloned().collect())
        }
    }

    fn all_newest_first(&self) -> impl Future<Output = Result<Vec<Todo>>> + Send {
        let inner = Arc::clone(&self.inner);

        async move {
            let guard = inner.lock().map_err(|_| poisoned())?;
            let mut todos: Vec<Todo> = guard.todos.values().cloned().collect();
            todos.sort_by(|a, b| {
                b.created_at
                    .cmp(&a.created_at)
                    .then_with(|| b.id.cmp(&a.id))
            });
            Ok(todos)
        }
    }

    fn find_by_id(&self, id: i64) -> impl Future<Output = Result<Todo>> + Send {
        let inner = Arc::clone(&self.inner);

        async move {
            inner
                .lock()
                .map_err(|_| poisoned())?
                .todos
                .get(&id)
                .cloned()
                .ok_or(TodoError::NotFound)
        }
    }

    fn insert(&self, draft: NewTodo) -> impl Future<Output = Result<Todo>> + Send {
        let inner = Arc::clone(&self.inner);

        async move {
            let mut guard = inner.lock().map_err(|_| poisoned())?;
            guard.next_id += 1;

            let now = Utc::now();
            let todo = Todo {
                id: guard.next_id,
                title: draft.title,
                description: draft.description,
                completed: false,
                created_at: now,
                updated_at: now,
            };

            guard.todos.insert(todo.id, todo.clone());
            Ok(todo)
        }
    }

    fn update(&self, id: i64, update: TodoUpdate) -> impl Future<Output = Result<Todo>> + Send {
        let inner = Arc::clone(&self.inner);

        async move {
            let mut guard = inner.lock().map_err(|_| poisoned())?;
            let todo = guard.todos.get_mut(&id).ok_or(TodoError::NotFound)?;

            todo.title = update.title;
            todo.description = update.description;
            todo.completed = update.completed;
            todo.updated_at = Utc::now();

            Ok(todo.clone())
        }
    }

    fn delete_by_id(&self, id: i64) -> impl Future<Output = Result<()>> + Send {
        let inner = Arc::clone(&self.inner);

        async move {
            // Absent ids are tolerated, mirroring the Postgres store.
            inner.lock().map_err(|_| poisoned())?.todos.remove(&id);
            Ok(())
        }
    }

    fn delete_all(&self) -> impl Future<Output = Result<()>> + Send {
        let inner = Arc::clone(&self.inner);

        async move {
            inner.lock().map_err(|_| poisoned())?.todos.clear();
            Ok(())
        }
    }

    fn by_completed(&self, completed: bool) -> impl Future<Output = Result<Vec<Todo>>> + Send {
        let inner = Arc::clone(&self.inner);

        async move {
            let guard = inner.lock().map_err(|_| poisoned())?;
            Ok(guard
                .todos
                .values()
                .filter(|t| t.completed == completed)
                .cloned()
                .collect())
        }
    }

    fn with_title_containing(
        &self,
        keyword: &str,
    ) -> impl Future<Output = Result<Vec<Todo>>> + Send {
        let inner = Arc::clone(&self.inner);
        let keyword = keyword.to_lowercase();

        async move {
            let guard = inner.lock().map_err(|_| poisoned())?;
            Ok(guard
                .todos
                .values()
                .filter(|t| t.title.to_lowercase().contains(&keyword))
                .cloned()
                .collect())
        }
    }

    fn count_completed(&self) -> impl Future<Output = Result<i64>> + Send {
        let inner = Arc::clone(&self.inner);

        async move {
            let guard = inner.lock().map_err(|_| poisoned())?;
            #[allow(clippy::cast_possible_wrap)] // Counts are far below i64::MAX
            let count = guard.todos.values().filter(|t| t.completed).count() as i64;
            Ok(count)
        }
    }

    fn count_pending(&self) -> impl Future<Output = Result<i64>> + Send {
        let inner = Arc::clone(&self.inner);

        async move {
            let guard = inner.lock().map_err(|_| poisoned())?;
            #[allow(clippy::cast_possible_wrap)] // Counts are far below i64::MAX
            let count = guard.todos.values().filter(|t| !t.completed).count() as i64;
            Ok(count)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_assigns_sequential_ids_and_equal_timestamps() {
        let repo = InMemoryTodoRepository::new();

        let first = repo
            .insert(NewTodo::new("First".to_string(), None))
            .await
            .unwrap();
        let second = repo
            .insert(NewTodo::new("Second".to_string(), Some("notes".to_string())))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(!first.completed);
        assert_eq!(first.created_at, first.updated_at);
    }

    #[tokio::test]
    async fn update_preserves_created_at() {
        let repo = InMemoryTodoRepository::new();
        let todo = repo
            .insert(NewTodo::new("Original".to_string(), None))
            .await
            .unwrap();

        let updated = repo
            .update(
                todo.id,
                TodoUpdate {
                    title: "Changed".to_string(),
                    description: Some("details".to_string()),
                    completed: true,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.created_at, todo.created_at);
        assert_eq!(updated.title, "Changed");
        assert!(updated.completed);
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let repo = InMemoryTodoRepository::new();

        let result = repo
            .update(
                42,
                TodoUpdate {
                    title: "Ghost".to_string(),
                    description: None,
                    completed: false,
                },
            )
            .await;

        assert_eq!(result, Err(TodoError::NotFound));
    }

    #[tokio::test]
    async fn delete_missing_id_succeeds() {
        let repo = InMemoryTodoRepository::new();
        assert!(repo.delete_by_id(42).await.is_ok());
    }

    #[tokio::test]
    async fn title_search_is_case_insensitive() {
        let repo = InMemoryTodoRepository::new();
        for title in ["My Todo", "TODO list", "a todo item", "grocery list"] {
            repo.insert(NewTodo::new(title.to_string(), None))
                .await
                .unwrap();
        }

        let found = repo.with_title_containing("todo").await.unwrap();
        let titles: Vec<&str> = found.iter().map(|t| t.title.as_str()).collect();

        assert_eq!(found.len(), 3);
        assert!(!titles.contains(&"grocery list"));
    }

    #[tokio::test]
    async fn counts_track_completion_flag() {
        let repo = InMemoryTodoRepository::new();
        let first = repo
            .insert(NewTodo::new("One".to_string(), None))
            .await
            .unwrap();
        repo.insert(NewTodo::new("Two".to_string(), None))
            .await
            .unwrap();

        repo.update(
            first.id,
            TodoUpdate {
                title: first.title.clone(),
                description: None,
                completed: true,
            },
        )
        .await
        .unwrap();

        assert_eq!(repo.count_completed().await.unwrap(), 1);
        assert_eq!(repo.count_pending().await.unwrap(), 1);

        repo.delete_all().await.unwrap();
        assert_eq!(repo.count_completed().await.unwrap(), 0);
        assert_eq!(repo.count_pending().await.unwrap(), 0);
    }
}
