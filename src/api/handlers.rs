//! HTTP request handlers for the Leave Approval Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::approval::{
    ensure_actionable, generate_reference_no, overall_status, validate_submission,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{LeaveRequest, LeaveSubmission};

use super::request::{ApprovalActionRequest, StaffQuery, StudentHistoryQuery, SubmitLeaveRequest};
use super::response::{ApiError, ApiErrorResponse, GatePassResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/leaves", post(submit_handler).get(student_history_handler))
        .route("/leaves/pending", get(pending_handler))
        .route("/leaves/history", get(staff_history_handler))
        .route("/leaves/:reference_no", get(lookup_handler))
        .route("/leaves/:reference_no/approval", post(approval_handler))
        .with_state(state)
}

fn json_rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
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
    }
}

/// Handler for `POST /leaves`.
///
/// Validates the submission, allocates a unique reference number, and
/// persists the new record.
async fn submit_handler(
    State(state): State<AppState>,
    payload: Result<Json<SubmitLeaveRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave submission");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let submission: LeaveSubmission = request.into();

    match perform_submission(&state, submission) {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                reference_no = %record.reference_no,
                student_id = %record.student_id,
                nature_of_leave = %record.nature_of_leave,
                "Leave application submitted"
            );
            (
                StatusCode::CREATED,
                [(header::CONTENT_TYPE, "application/json")],
                Json(record),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Leave submission rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Validates a submission and inserts it under a fresh reference number.
///
/// Reference numbers are collision resistant but not assumed unique: the
/// insert is retried with a new token whenever the store reports a
/// duplicate, up to the configured attempt budget.
fn perform_submission(
    state: &AppState,
    submission: LeaveSubmission,
) -> EngineResult<LeaveRequest> {
    validate_submission(&submission)?;

    let policy = state.config().config().reference();

    for _ in 0..policy.max_attempts {
        let reference_no = generate_reference_no(&policy.prefix, policy.token_length);
        let record =
            LeaveRequest::from_submission(reference_no, submission.clone(), Utc::now());

        match state.store().insert(record.clone()) {
            Ok(()) => return Ok(record),
            Err(EngineError::DuplicateReference { reference_no }) => {
                warn!(reference_no = %reference_no, "Reference collision, regenerating");
            }
            Err(err) => return Err(err),
        }
    }

    Err(EngineError::ReferenceCollision {
        attempts: policy.max_attempts,
    })
}

/// Handler for `POST /leaves/{reference_no}/approval`.
///
/// Authenticates the staff identity, checks the transition against the
/// state machine, and records the decision.
async fn approval_handler(
    State(state): State<AppState>,
    Path(reference_no): Path<String>,
    payload: Result<Json<ApprovalActionRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        reference_no = %reference_no,
        "Processing approval action"
    );

    let action = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    match perform_approval(&state, &reference_no, &action) {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                reference_no = %record.reference_no,
                staff_id = %action.staff_id,
                role = %action.role,
                decision = ?action.decision,
                overall = %overall_status(&record),
                "Approval recorded"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(record),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                reference_no = %reference_no,
                staff_id = %action.staff_id,
                error = %err,
                "Approval action rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Applies one approval action to one record.
///
/// The rule check runs against a snapshot and the store re-checks the
/// targeted field under its own lock, so a concurrent decision on the
/// same field surfaces as `AlreadyDecided` rather than a lost update.
fn perform_approval(
    state: &AppState,
    reference_no: &str,
    action: &ApprovalActionRequest,
) -> EngineResult<LeaveRequest> {
    state.config().authenticate(&action.staff_id, action.role)?;

    let record = state
        .store()
        .get(reference_no)?
        .ok_or_else(|| EngineError::LeaveNotFound {
            reference_no: reference_no.to_string(),
        })?;

    ensure_actionable(&record, action.role, action.target)?;

    state
        .store()
        .apply_decision(reference_no, action.target, action.decision.status())
}

/// Handler for `GET /leaves?student_id=`.
async fn student_history_handler(
    State(state): State<AppState>,
    Query(query): Query<StudentHistoryQuery>,
) -> impl IntoResponse {
    match state.store().for_student(&query.student_id) {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for `GET /leaves/pending?role=&staff_id=`.
///
/// Returns the visibility-gated work queue for the given staff role,
/// oldest first.
async fn pending_handler(
    State(state): State<AppState>,
    Query(query): Query<StaffQuery>,
) -> impl IntoResponse {
    let result = state
        .config()
        .authenticate(&query.staff_id, query.role)
        .map(|_| ())
        .and_then(|()| state.store().pending_for(query.role));

    match result {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(err) => {
            warn!(
                staff_id = %query.staff_id,
                role = %query.role,
                error = %err,
                "Pending list request rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `GET /leaves/history?role=&staff_id=`.
///
/// Returns the requests the role has already decided, newest first.
async fn staff_history_handler(
    State(state): State<AppState>,
    Query(query): Query<StaffQuery>,
) -> impl IntoResponse {
    let result = state
        .config()
        .authenticate(&query.staff_id, query.role)
        .map(|_| ())
        .and_then(|()| state.store().decided_by(query.role));

    match result {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(err) => {
            warn!(
                staff_id = %query.staff_id,
                role = %query.role,
                error = %err,
                "Staff history request rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `GET /leaves/{reference_no}`.
///
/// Gate-pass lookup: returns the record together with its derived
/// overall status.
async fn lookup_handler(
    State(state): State<AppState>,
    Path(reference_no): Path<String>,
) -> impl IntoResponse {
    let result = state
        .store()
        .get(&reference_no)
        .and_then(|record| {
            record.ok_or_else(|| EngineError::LeaveNotFound {
                reference_no: reference_no.clone(),
            })
        });

    match result {
        Ok(record) => {
            let response = GatePassResponse {
                overall_status: overall_status(&record),
                request: record,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::config::{ConfigLoader, HostelConfig, HostelMetadata, ReferencePolicy, StaffMember};
    use crate::models::StaffRole;
    use crate::store::MemoryLeaveStore;

    fn create_test_state() -> AppState {
        let config = HostelConfig::new(
            HostelMetadata {
                name: "Sunrise Hostel".to_string(),
                code: "SUN-01".to_string(),
            },
            ReferencePolicy::default(),
            vec![
                StaffMember {
                    id: "C101".to_string(),
                    name: "Dr. Sharma".to_string(),
                    role: StaffRole::Coordinator,
                },
                StaffMember {
                    id: "T999".to_string(),
                    name: "Prof. Patel".to_string(),
                    role: StaffRole::Rector,
                },
            ],
        );
        AppState::new(
            ConfigLoader::from_config(config),
            Arc::new(MemoryLeaveStore::new()),
        )
    }

    fn valid_submission() -> Value {
        json!({
            "student_id": "S1001",
            "student_name": "John Doe",
            "room_no": "A-205",
            "departure": "2026-02-10T08:30:00",
            "arrival": "2026-02-12",
            "reason": "Family function",
            "destination": "Pune",
            "guardian_name": "R. Doe",
            "guardian_contact": "9876543210",
            "nature_of_leave": "working"
        })
    }

    async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_submit_valid_request_returns_201() {
        let router = create_router(create_test_state());

        let (status, body) = post_json(router, "/leaves", valid_submission()).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["coordinator_approval"], "Pending");
        assert_eq!(body["rector_approval"], "Pending");
        let reference = body["reference_no"].as_str().unwrap();
        assert!(reference.starts_with("HLM-"));
        assert_eq!(reference.len(), 4 + 15);
    }

    #[tokio::test]
    async fn test_submit_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/leaves")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_submit_missing_field_returns_400() {
        let router = create_router(create_test_state());

        let mut body = valid_submission();
        body.as_object_mut().unwrap().remove("departure");

        let (status, error) = post_json(router, "/leaves", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(
            error["message"]
                .as_str()
                .unwrap()
                .contains("missing field"),
            "Expected missing-field message, got: {}",
            error["message"]
        );
    }

    #[tokio::test]
    async fn test_unknown_staff_cannot_list_pending() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/leaves/pending?role=rector&staff_id=Z000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_lookup_unknown_reference_returns_404() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/leaves/HLM-DOESNOTEXIST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
