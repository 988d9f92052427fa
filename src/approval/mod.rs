//! Approval logic for the Leave Approval Engine.
//!
//! This module contains the state-machine rules for leave requests:
//! submission validation, reference-number generation, the visibility
//! gate that sequences the two approval stages, transition guarding,
//! and overall status derivation.

mod reference;
mod status;
mod transition;
mod validation;
mod visibility;

pub use reference::{REFERENCE_PREFIX, REFERENCE_TOKEN_LENGTH, generate_reference_no};
pub use status::{OverallStatus, overall_status};
pub use transition::{apply_approval, ensure_actionable};
pub use validation::validate_submission;
pub use visibility::{is_pending_for, was_decided_by};
