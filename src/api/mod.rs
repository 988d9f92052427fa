//! HTTP API module for the Leave Approval Engine.
//!
//! This module provides the REST endpoints for submitting leave
//! requests, listing work queues and histories, and applying approval
//! decisions.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ApprovalActionRequest, StaffQuery, StudentHistoryQuery, SubmitLeaveRequest};
pub use response::{ApiError, GatePassResponse};
pub use state::AppState;
