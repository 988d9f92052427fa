//! Response types for the Leave Approval Engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API, plus the gate-pass lookup payload.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::approval::OverallStatus;
use crate::error::EngineError;
use crate::models::LeaveRequest;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// Response body for the gate-pass lookup endpoint.
///
/// Carries the stored record plus its derived overall status so the gate
/// can verify a pass without re-deriving the aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatePassResponse {
    /// The stored leave request.
    #[serde(flatten)]
    pub request: LeaveRequest,
    /// The derived aggregate status.
    pub overall_status: OverallStatus,
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::Validation { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid submission field '{}'", field),
                    message,
                ),
            },
            EngineError::WrongApprovalTarget { role, field } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "WRONG_APPROVAL_TARGET",
                    format!("Role '{}' may not write approval field '{}'", role, field),
                    "Each staff role owns exactly one approval field",
                ),
            },
            EngineError::AlreadyDecided { field, status } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "ALREADY_DECIDED",
                    format!("Approval field '{}' already decided: {}", field, status),
                    "Terminal decisions cannot be overwritten",
                ),
            },
            EngineError::AwaitingCoordinator { reference_no } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "AWAITING_COORDINATOR",
                    format!("Leave '{}' is awaiting coordinator approval", reference_no),
                    "Working-nature leaves reach the rector only after coordinator approval",
                ),
            },
            EngineError::CoordinatorSkipped { reference_no } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "COORDINATOR_SKIPPED",
                    format!(
                        "Leave '{}' does not require coordinator approval",
                        reference_no
                    ),
                    "Non-working leaves go straight to the rector",
                ),
            },
            EngineError::LeaveNotFound { reference_no } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new(
                    "LEAVE_NOT_FOUND",
                    format!("Leave request not found: {}", reference_no),
                ),
            },
            EngineError::UnknownStaff { staff_id, role } => ApiErrorResponse {
                status: StatusCode::FORBIDDEN,
                error: ApiError::with_details(
                    "UNKNOWN_STAFF",
                    format!("Unknown staff member '{}' for role '{}'", staff_id, role),
                    "The staff directory has no such member under that role",
                ),
            },
            EngineError::DuplicateReference { reference_no } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "REFERENCE_ERROR",
                    "Reference number collision",
                    format!("Reference '{}' already exists", reference_no),
                ),
            },
            EngineError::ReferenceCollision { attempts } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "REFERENCE_ERROR",
                    "Failed to allocate a unique reference number",
                    format!("Gave up after {} attempts", attempts),
                ),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::Store { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORE_ERROR", "Store failure", message),
            },
        }
    }
}
