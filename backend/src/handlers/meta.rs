//! Welcome and health endpoints.
//!
//! Both are static informational responses. The health endpoint performs
//! no dependency checks; it only confirms the process is serving.

use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Human-readable service name reported by the health endpoint.
const SERVICE_NAME: &str = "Todo Backend";

/// Response body of `GET /api/welcome`.
#[derive(Debug, Clone, Serialize)]
pub struct WelcomeResponse {
    /// Greeting message.
    pub message: &'static str,
    /// Always `"success"`.
    pub status: &'static str,
    /// Current server time.
    pub timestamp: DateTime<Utc>,
    /// Crate version.
    pub version: &'static str,
}

/// Response body of `GET /api/health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always `"UP"` while the process serves requests.
    pub status: &'static str,
    /// Service name.
    pub service: &'static str,
}

/// Welcome endpoint.
///
/// # Endpoint
///
/// ```text
/// GET /api/welcome
/// ```
#[allow(clippy::unused_async)]
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to Todo App Backend!",
        status: "success",
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Informational health endpoint (no dependency checks).
///
/// # Endpoint
///
/// ```text
/// GET /api/health
/// ```
#[allow(clippy::unused_async)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP",
        service: SERVICE_NAME,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn welcome_reports_success_and_version() {
        let Json(body) = welcome().await;
        let json = serde_json::to_value(body).unwrap();

        assert_eq!(json["message"], "Welcome to Todo App Backend!");
        assert_eq!(json["status"], "success");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
        assert!(json.get("timestamp").is_some());
    }

    #[tokio::test]
    async fn health_reports_up() {
        let Json(body) = health().await;
        let json = serde_json::to_value(body).unwrap();

        assert_eq!(json["status"], "UP");
        assert_eq!(json["service"], "Todo Backend");
    }
}
