//! HTTP request handlers for the station rota API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::allocation::{StoreHours, generate_schedule};
use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::intake::normalize_workers;
use crate::models::ScheduleOutcome;
use crate::report::render;

use super::request::ScheduleRequest;
use super::response::{ApiError, ApiErrorResponse, ScheduleResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/schedule", post(schedule_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    json_response(StatusCode::OK, serde_json::json!({ "status": "ok" }))
}

/// Handler for POST /schedule.
///
/// Accepts worker records and returns the rendered schedule.
async fn schedule_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing schedule request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let start_time = Instant::now();
    let workers_count = request.workers.len();
    match build_schedule(&request, state.config()) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                workers_count,
                status = %response.status,
                duration_us = start_time.elapsed().as_micros(),
                "Schedule generated"
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Schedule generation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Normalizes the request, allocates every slot and renders the result.
fn build_schedule(
    request: &ScheduleRequest,
    config: &ConfigLoader,
) -> EngineResult<ScheduleResponse> {
    let store_hours = match &request.store_hours {
        Some(hours) => StoreHours::parse(&hours.open, &hours.close)?,
        None => config.store_hours(),
    };
    let workers = normalize_workers(&request.workers, config.break_minutes())?;

    let outcome = generate_schedule(&workers, &store_hours);
    let csv = render(&outcome, config.delimiter())?;

    Ok(match outcome {
        ScheduleOutcome::Schedule { matrix, trace } => ScheduleResponse {
            status: "ok".to_string(),
            csv,
            matrix: Some(matrix),
            trace: Some(trace),
        },
        ScheduleOutcome::NoData => ScheduleResponse {
            status: "no_data".to_string(),
            csv,
            matrix: None,
            trace: None,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::StoreHoursRequest;
    use crate::intake::WorkerInput;
    use crate::models::{NO_DATA_SENTINEL, Station};
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/rota.yaml").expect("Failed to load config");
        AppState::new(config)
    }

    fn worker(name: &str, start: &str, end: &str) -> WorkerInput {
        WorkerInput {
            name: name.to_string(),
            shift_start: Some(start.to_string()),
            shift_end: Some(end.to_string()),
            break_start: None,
            training: vec![],
        }
    }

    fn post_schedule(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/schedule")
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let router = create_router(create_test_state());
        let request = ScheduleRequest {
            store_hours: None,
            workers: vec![worker("Jane Doe", "9:00 AM", "10:00 AM")],
        };

        let response = router
            .oneshot(post_schedule(serde_json::to_string(&request).unwrap()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: ScheduleResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.status, "ok");
        assert!(result.csv.starts_with("Position,9:00 AM,9:30 AM\n"));
        let matrix = result.matrix.unwrap();
        assert_eq!(matrix.cell(Station::Handout, "9:00 AM"), Some("Jane D."));
    }

    #[tokio::test]
    async fn test_no_workers_returns_sentinel() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_schedule(r#"{"workers": []}"#.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: ScheduleResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.status, "no_data");
        assert_eq!(result.csv, NO_DATA_SENTINEL);
        assert!(result.matrix.is_none());
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_schedule("{invalid json".to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_workers_returns_validation_error() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_schedule(r#"{"store_hours": null}"#.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("workers"), "got: {}", error.message);
    }

    #[tokio::test]
    async fn test_blank_name_returns_invalid_worker() {
        let router = create_router(create_test_state());
        let request = ScheduleRequest {
            store_hours: None,
            workers: vec![worker("  ", "9:00 AM", "10:00 AM")],
        };

        let response = router
            .oneshot(post_schedule(serde_json::to_string(&request).unwrap()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_WORKER");
    }

    #[tokio::test]
    async fn test_bad_store_hours_returns_400() {
        let router = create_router(create_test_state());
        let request = ScheduleRequest {
            store_hours: Some(StoreHoursRequest {
                open: "dawn".to_string(),
                close: "5:00 PM".to_string(),
            }),
            workers: vec![worker("Jane Doe", "9:00 AM", "10:00 AM")],
        };

        let response = router
            .oneshot(post_schedule(serde_json::to_string(&request).unwrap()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_STORE_HOURS");
    }

    #[tokio::test]
    async fn test_request_store_hours_override_config() {
        let router = create_router(create_test_state());
        let request = ScheduleRequest {
            store_hours: Some(StoreHoursRequest {
                open: "9:30 AM".to_string(),
                close: "5:00 PM".to_string(),
            }),
            workers: vec![worker("Jane Doe", "9:00 AM", "10:00 AM")],
        };

        let response = router
            .oneshot(post_schedule(serde_json::to_string(&request).unwrap()))
            .await
            .unwrap();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: ScheduleResponse = serde_json::from_slice(&body).unwrap();
        let matrix = result.matrix.unwrap();
        assert_eq!(matrix.cell(Station::Handout, "9:00 AM"), Some(""));
        assert_eq!(matrix.cell(Station::Handout, "9:30 AM"), Some("Jane D."));
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, serde_json::json!({ "status": "ok" }));
    }
}
