//! Error types for the Leave Approval Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while processing leave requests.

use thiserror::Error;

use crate::models::{ApprovalField, ApprovalStatus, StaffRole};

/// The main error type for the Leave Approval Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::LeaveNotFound {
///     reference_no: "HLM-MISSING".to_string(),
/// };
/// assert_eq!(error.to_string(), "Leave request not found: HLM-MISSING");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A submission field was missing or invalid.
    #[error("Invalid submission field '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A staff member attempted to write an approval field they do not own.
    #[error("Role '{role}' may not write approval field '{field}'")]
    WrongApprovalTarget {
        /// The role that attempted the action.
        role: StaffRole,
        /// The approval field that was targeted.
        field: ApprovalField,
    },

    /// The targeted approval field already holds a terminal decision.
    #[error("Approval field '{field}' already decided: {status}")]
    AlreadyDecided {
        /// The approval field that was targeted.
        field: ApprovalField,
        /// The terminal status currently recorded.
        status: ApprovalStatus,
    },

    /// The rector acted on a working-nature leave before coordinator approval.
    #[error("Leave '{reference_no}' is awaiting coordinator approval")]
    AwaitingCoordinator {
        /// The reference number of the blocked request.
        reference_no: String,
    },

    /// The coordinator acted on a non-working leave, which skips their stage.
    #[error("Leave '{reference_no}' does not require coordinator approval")]
    CoordinatorSkipped {
        /// The reference number of the request.
        reference_no: String,
    },

    /// No leave request exists under the given reference number.
    #[error("Leave request not found: {reference_no}")]
    LeaveNotFound {
        /// The reference number that was not found.
        reference_no: String,
    },

    /// The staff identity is not present in the directory under that role.
    #[error("Unknown staff member '{staff_id}' for role '{role}'")]
    UnknownStaff {
        /// The staff identifier presented with the request.
        staff_id: String,
        /// The role claimed by the request.
        role: StaffRole,
    },

    /// A record with the same reference number already exists in the store.
    #[error("Duplicate reference number: {reference_no}")]
    DuplicateReference {
        /// The colliding reference number.
        reference_no: String,
    },

    /// Reference-number generation kept colliding until the retry budget ran out.
    #[error("Failed to generate a unique reference number after {attempts} attempts")]
    ReferenceCollision {
        /// How many generation attempts were made.
        attempts: u32,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The persistence store was unavailable or corrupted.
    #[error("Store failure: {message}")]
    Store {
        /// A description of the store failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
