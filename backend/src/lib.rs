//! REST backend for the todo-list application.
//!
//! Create, read, update, delete, filter, and search todo items over HTTP,
//! backed by a single PostgreSQL table.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         HTTP layer (Axum)               │  ← routing, JSON, CORS
//! │  - handlers::todos, handlers::meta      │  ← request tracing
//! ├─────────────────────────────────────────┤
//! │         Repository layer                │
//! │  - TodoRepository trait                 │  ← one method per query shape
//! │  - stores::PostgresTodoRepository       │  ← sqlx, plain SQL
//! │  - mocks::InMemoryTodoRepository        │  ← handler tests
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Request Flow
//!
//! 1. **HTTP request** arrives at an Axum handler
//! 2. **Parse** path/query/body into typed shapes
//! 3. **Delegate** to the repository
//! 4. **Map** the result (or a [`TodoError`]) to an HTTP response
//!
//! # Example
//!
//! ```ignore
//! use todo_backend::stores::PostgresTodoRepository;
//! use todo_backend::{router, AppState};
//!
//! let repository = PostgresTodoRepository::new(pool);
//! let app = router(AppState::new(repository), allowed_origin);
//! axum::serve(listener, app).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod handlers;
#[cfg(feature = "test-utils")]
pub mod mocks;
pub mod repository;
pub mod router;
pub mod state;
pub mod stores;
pub mod todo;

// Re-export key types for convenience
pub use config::AppConfig;
pub use error::{Result, TodoError};
pub use repository::TodoRepository;
pub use router::router;
pub use state::AppState;
pub use todo::{NewTodo, Todo, TodoUpdate};
