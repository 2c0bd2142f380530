//! Todo endpoints under `/api/todos`.
//!
//! Handlers parse the request, delegate to the repository, and let
//! [`TodoError`](crate::error::TodoError)'s `IntoResponse` impl translate
//! failures, so no status-code mapping lives here.

use crate::error::Result;
use crate::repository::TodoRepository;
use crate::state::AppState;
use crate::todo::{NewTodo, Todo, TodoUpdate};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

/// Request body for creating a todo.
///
/// Only title and description are accepted; a client-sent `id`,
/// `completed`, or timestamps are dropped during deserialization. The
/// server assigns all of those.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateTodoRequest {
    /// Title of the new todo.
    pub title: String,

    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Request body for updating a todo.
///
/// The update is a wholesale replacement: fields the client omits
/// overwrite the stored values with the defaults below (`description`
/// becomes null, `completed` becomes false). There is no partial-update
/// form.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateTodoRequest {
    /// New title.
    pub title: String,

    /// New description; omitting it clears the stored one.
    #[serde(default)]
    pub description: Option<String>,

    /// New completion flag; omitting it resets the todo to pending.
    #[serde(default)]
    pub completed: bool,
}

/// Query parameters for the title search. `keyword` is required; a
/// request without it is rejected by the extractor with a 400.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    /// Substring to look for in titles, case-insensitive.
    pub keyword: String,
}

/// List all todos, newest first.
///
/// # Endpoint
///
/// ```text
/// GET /api/todos
/// ```
pub async fn list_todos<R: TodoRepository>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<Todo>>> {
    let todos = state.repository.all_newest_first().await?;
    Ok(Json(todos))
}

/// Fetch a single todo by id. 404 with an empty body if absent.
///
/// # Endpoint
///
/// ```text
/// GET /api/todos/{id}
/// ```
pub async fn get_todo<R: TodoRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>> {
    let todo = state.repository.find_by_id(id).await?;
    Ok(Json(todo))
}

/// Create a todo from title and description.
///
/// The new todo always starts pending with server-assigned id and
/// timestamps, regardless of what else the client sent.
///
/// # Endpoint
///
/// ```text
/// POST /api/todos
/// Content-Type: application/json
///
/// { "title": "Buy milk", "description": "2 liters" }
/// ```
pub async fn create_todo<R: TodoRepository>(
    State(state): State<AppState<R>>,
    Json(request): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>)> {
    let draft = NewTodo::new(request.title, request.description);
    let todo = state.repository.insert(draft).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// Replace title, description, and completion flag of an existing todo.
/// 404 if the id does not exist.
///
/// # Endpoint
///
/// ```text
/// PUT /api/todos/{id}
/// ```
pub async fn update_todo<R: TodoRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateTodoRequest>,
) -> Result<Json<Todo>> {
    let update = TodoUpdate {
        title: request.title,
        description: request.description,
        completed: request.completed,
    };
    let todo = state.repository.update(id, update).await?;
    Ok(Json(todo))
}

/// Delete one todo. Returns 204 whether or not the id existed.
///
/// # Endpoint
///
/// ```text
/// DELETE /api/todos/{id}
/// ```
pub async fn delete_todo<R: TodoRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    state.repository.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete every todo.
///
/// # Endpoint
///
/// ```text
/// DELETE /api/todos
/// ```
pub async fn delete_all_todos<R: TodoRepository>(
    State(state): State<AppState<R>>,
) -> Result<StatusCode> {
    state.repository.delete_all().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List completed todos.
///
/// # Endpoint
///
/// ```text
/// GET /api/todos/completed
/// ```
pub async fn completed_todos<R: TodoRepository>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<Todo>>> {
    let todos = state.repository.by_completed(true).await?;
    Ok(Json(todos))
}

/// List pending todos.
///
/// # Endpoint
///
/// ```text
/// GET /api/todos/pending
/// ```
pub async fn pending_todos<R: TodoRepository>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<Todo>>> {
    let todos = state.repository.by_completed(false).await?;
    Ok(Json(todos))
}

/// Search todos by title substring, case-insensitive.
///
/// # Endpoint
///
/// ```text
/// GET /api/todos/search?keyword=milk
/// ```
pub async fn search_todos<R: TodoRepository>(
    State(state): State<AppState<R>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Todo>>> {
    let todos = state
        .repository
        .with_title_containing(&params.keyword)
        .await?;
    Ok(Json(todos))
}
