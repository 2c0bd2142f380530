//! Application state for Axum handlers.

use crate::repository::TodoRepository;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
///
/// Generic over the repository implementation so production code runs
/// against PostgreSQL while tests run against the in-memory repository.
pub struct AppState<R> {
    /// Todo storage.
    pub repository: Arc<R>,
}

impl<R: TodoRepository> AppState<R> {
    /// Create a new application state around a repository.
    #[must_use]
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }
}

// Manual impl: `Arc` clones regardless of whether `R` itself is `Clone`.
impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::InMemoryTodoRepository;

    #[test]
    fn state_is_clone() {
        let state = AppState::new(InMemoryTodoRepository::new());
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.repository, &cloned.repository));
    }
}
