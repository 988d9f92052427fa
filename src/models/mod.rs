//! Core data models for the Leave Approval Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod leave_request;
mod staff;
mod submission;

pub use leave_request::{ApprovalStatus, LeaveRequest, NatureOfLeave};
pub use staff::{ApprovalDecision, ApprovalField, StaffRole};
pub use submission::LeaveSubmission;
