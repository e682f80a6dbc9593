//! Outlay REST API
//!
//! HTTP API layer for Outlay, built with Axum.
//!
//! # Endpoints
//!
//! ## Expenses
//! - `POST /api/v1/add-income` - Create an expense record
//! - `GET /api/v1/get-incomes` - List all records, newest first
//! - `DELETE /api/v1/delete-income/:id` - Delete a record by id
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use outlay::api::{serve, ApiConfig, AppState};
//! use outlay::store::{ExpenseCollection, StoreConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(ExpenseCollection::open(StoreConfig::default())?);
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(store, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/add-income", post(routes::expenses::add_expense))
        .route("/get-incomes", get(routes::expenses::list_expenses))
        .route("/delete-income/:id", delete(routes::expenses::delete_expense));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // The dashboard is served from a different origin
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Outlay API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Outlay API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ExpenseCollection, ExpenseRecord, StoreConfig};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    fn create_test_app() -> (Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let config = StoreConfig::new(dir.path().join("test.db"));
        let store = Arc::new(ExpenseCollection::open(config).unwrap());
        let api_config = ApiConfig::default();

        let state = AppState::new(store, api_config);
        let router = build_router(state);

        (router, dir)
    }

    fn add_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/add-income")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn list_request() -> Request<Body> {
        Request::builder()
            .uri("/api/v1/get-incomes")
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    const VALID_BODY: &str = r#"{
        "title": "Lunch",
        "amount": 12.5,
        "category": "Food",
        "description": "noodles",
        "date": "2026-08-20"
    }"#;

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/ready")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["records"], 0);
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let (app, _dir) = create_test_app();

        let response = app.clone().oneshot(add_request(VALID_BODY)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["message"], "Expense Added");

        let response = app.oneshot(list_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let records: Vec<ExpenseRecord> = serde_json::from_value(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Lunch");
        assert_eq!(records[0].amount, 12.5);
        assert_eq!(records[0].category, "Food");
    }

    #[tokio::test]
    async fn test_add_missing_field_rejected() {
        let (app, _dir) = create_test_app();

        // One request per missing required field
        let bodies = [
            r#"{"amount": 12.5, "category": "Food", "description": "noodles", "date": "2026-08-20"}"#,
            r#"{"title": "Lunch", "amount": 12.5, "description": "noodles", "date": "2026-08-20"}"#,
            r#"{"title": "Lunch", "amount": 12.5, "category": "Food", "date": "2026-08-20"}"#,
            r#"{"title": "Lunch", "amount": 12.5, "category": "Food", "description": "noodles"}"#,
        ];

        for body in bodies {
            let response = app.clone().oneshot(add_request(body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);

            let json = body_json(response).await;
            assert_eq!(json["message"], "All fields are required!");
        }

        // Nothing persisted
        let response = app.oneshot(list_request()).await.unwrap();
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_add_overlong_title_rejected() {
        let (app, _dir) = create_test_app();

        let body = format!(
            r#"{{"title": "{}", "amount": 12.5, "category": "Food", "description": "noodles", "date": "2026-08-20"}}"#,
            "x".repeat(500)
        );
        let response = app.clone().oneshot(add_request(&body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["message"], "Title is too long!");

        // Nothing persisted
        let response = app.oneshot(list_request()).await.unwrap();
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_add_non_positive_amount_rejected() {
        let (app, _dir) = create_test_app();

        for amount in ["0", "-3.5"] {
            let body = format!(
                r#"{{"title": "Lunch", "amount": {}, "category": "Food", "description": "noodles", "date": "2026-08-20"}}"#,
                amount
            );
            let response = app.clone().oneshot(add_request(&body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);

            let json = body_json(response).await;
            assert_eq!(json["message"], "Amount must be a positive number!");
        }
    }

    #[tokio::test]
    async fn test_add_invalid_json_rejected() {
        let (app, _dir) = create_test_app();

        let response = app.oneshot(add_request("not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let (app, _dir) = create_test_app();

        for i in 0..4 {
            let body = format!(
                r#"{{"title": "expense-{}", "amount": 10, "category": "Food", "description": "n", "date": "2026-08-20"}}"#,
                i
            );
            let response = app.clone().oneshot(add_request(&body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app.oneshot(list_request()).await.unwrap();
        let json = body_json(response).await;
        let records: Vec<ExpenseRecord> = serde_json::from_value(json).unwrap();

        assert_eq!(records.len(), 4);
        assert_eq!(records[0].title, "expense-3");
        assert_eq!(records[3].title, "expense-0");
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let (app, _dir) = create_test_app();

        app.clone().oneshot(add_request(VALID_BODY)).await.unwrap();

        let response = app.clone().oneshot(list_request()).await.unwrap();
        let json = body_json(response).await;
        let records: Vec<ExpenseRecord> = serde_json::from_value(json).unwrap();
        let id = records[0].id.clone();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/v1/delete-income/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["message"], "Expense Deleted");

        let response = app.oneshot(list_request()).await.unwrap();
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_still_succeeds() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/v1/delete-income/no-such-id")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["message"], "Expense Deleted");
    }
}
