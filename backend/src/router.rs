//! Router composition.
//!
//! Wires every endpoint to its handler and layers request tracing and
//! CORS on top.

use crate::handlers::{meta, todos};
use crate::repository::TodoRepository;
use crate::state::AppState;
use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the application router.
///
/// # Routes
///
/// ## Todos
/// - `GET /api/todos` - List all todos, newest first
/// - `POST /api/todos` - Create a todo
/// - `DELETE /api/todos` - Delete all todos
/// - `GET /api/todos/{id}` - Fetch one todo
/// - `PUT /api/todos/{id}` - Replace one todo
/// - `DELETE /api/todos/{id}` - Delete one todo
/// - `GET /api/todos/completed` - Completed todos
/// - `GET /api/todos/pending` - Pending todos
/// - `GET /api/todos/search?keyword=K` - Title substring search
///
/// ## Meta
/// - `GET /api/welcome` - Welcome message
/// - `GET /api/health` - Informational health status
///
/// Cross-origin calls are allowed from `allowed_origin` only, for the
/// methods and headers the front-end actually uses.
pub fn router<R>(state: AppState<R>, allowed_origin: HeaderValue) -> Router
where
    R: TodoRepository + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(
            "/api/todos",
            get(todos::list_todos::<R>)
                .post(todos::create_todo::<R>)
                .delete(todos::delete_all_todos::<R>),
        )
        .route("/api/todos/completed", get(todos::completed_todos::<R>))
        .route("/api/todos/pending", get(todos::pending_todos::<R>))
        .route("/api/todos/search", get(todos::search_todos::<R>))
        .route(
            "/api/todos/:id",
            get(todos::get_todo::<R>)
                .put(todos::update_todo::<R>)
                .delete(todos::delete_todo::<R>),
        )
        .route("/api/welcome", get(meta::welcome))
        .route("/api/health", get(meta::health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::mocks::InMemoryTodoRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    const ORIGIN: &str = "http://localhost:3000";

    fn test_app() -> Router {
        let state = AppState::new(InMemoryTodoRepository::new());
        router(state, HeaderValue::from_static(ORIGIN))
    }

    #[tokio::test]
    async fn allows_the_configured_origin() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/todos")
                    .header(header::ORIGIN, ORIGIN)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .map(|v| v.to_str().unwrap()),
            Some(ORIGIN)
        );
    }

    #[tokio::test]
    async fn rejects_other_origins() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/todos")
                    .header(header::ORIGIN, "http://evil.example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // Request still succeeds; the browser blocks it because no
        // allow-origin header comes back.
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn preflight_advertises_write_methods() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/todos/1")
                    .header(header::ORIGIN, ORIGIN)
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let methods = response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .map(|v| v.to_str().unwrap().to_string())
            .unwrap_or_default();
        assert!(methods.contains("PUT"));
        assert!(methods.contains("DELETE"));
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
