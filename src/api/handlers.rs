//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::request::PayrollRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/payroll/calculate", post(calculate_payroll_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Handler for POST /payroll/calculate.
///
/// Validates the requested month, runs payroll, and returns every record
/// with the month summary.
async fn calculate_payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

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

    let pay_month = match request.pay_month() {
        Ok(pay_month) => pay_month,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                month = request.month,
                year = request.year,
                "Rejected invalid pay month"
            );
            return error_response(err.into());
        }
    };

    // Collaborators may block, so the run stays off the async workers
    let engine = state.engine();
    let employee_id = request.employee_id;
    let outcome = tokio::task::spawn_blocking(move || engine.run(pay_month, employee_id)).await;

    match outcome {
        Ok(Ok(run)) => {
            info!(
                correlation_id = %correlation_id,
                pay_month = %pay_month,
                total = run.total,
                total_net_salary = %run.summary.total_net_salary,
                "Payroll calculated successfully"
            );
            json_response(StatusCode::OK, run)
        }
        Ok(Err(err)) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll calculation failed"
            );
            error_response(err.into())
        }
        Err(join_error) => {
            error!(
                correlation_id = %correlation_id,
                error = %join_error,
                "Payroll calculation task did not complete"
            );
            json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", "Payroll calculation did not complete"),
            )
        }
    }
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, api_error.error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PayrollEngine;
    use crate::error::EngineResult;
    use crate::models::{EmployeeRecord, EmployeeStatus, PayrollRun};
    use crate::store::{InMemoryStore, SettingsStore};
    use axum::{body::Body, http::Request};
    use rust_decimal::Decimal;
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let store = InMemoryStore::new().with_employee(EmployeeRecord {
            id: 1,
            code: "EMP001".to_string(),
            full_name: "Nguyen Van A".to_string(),
            position: None,
            department_name: None,
            status: EmployeeStatus::Active,
            base_salary: Some(Decimal::new(22_000_000, 0)),
        });
        AppState::new(PayrollEngine::from_store(store))
    }

    async fn post(body: &str) -> Response {
        create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/payroll/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let response = post(r#"{ "month": 3, "year": 2024 }"#).await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let run: PayrollRun = serde_json::from_slice(&body).unwrap();
        assert_eq!(run.total, 1);
        assert_eq!(run.payroll_records[0].employee_code, "EMP001");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let response = post("{invalid json").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_validation_error() {
        let response = post(r#"{ "month": 3 }"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_month_out_of_range_returns_400() {
        let response = post(r#"{ "month": 13, "year": 2024 }"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["code"], "INVALID_PAY_MONTH");
    }

    struct BlockingSettings;

    impl SettingsStore for BlockingSettings {
        fn get_all(&self, _keys: &[&str]) -> EngineResult<HashMap<String, String>> {
            // Synchronous client over an async driver; panics on an async worker
            tokio::runtime::Handle::current()
                .block_on(tokio::time::sleep(Duration::from_millis(1)));
            Ok(HashMap::new())
        }
    }

    #[tokio::test]
    async fn test_blocking_collaborator_runs_off_async_workers() {
        let store = Arc::new(InMemoryStore::new());
        let engine = PayrollEngine::new(Arc::new(BlockingSettings), store.clone(), store);

        let response = create_router(AppState::new(engine))
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/payroll/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{ "month": 3, "year": 2024 }"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["total"], 0);
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let response = create_router(create_test_state())
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
        assert_eq!(json["status"], "ok");
    }
}
