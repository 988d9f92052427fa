//! Overall status derivation.
//!
//! The aggregate, student-facing status of a request is derived from the
//! two approval fields and the nature of the leave; it is never stored.

use serde::{Deserialize, Serialize};

use crate::models::{ApprovalStatus, LeaveRequest, NatureOfLeave};

/// The aggregate status of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverallStatus {
    /// At least one required decision is still outstanding.
    Pending,
    /// Every required stage has approved the request.
    Approved,
    /// At least one stage has rejected the request.
    Rejected,
}

impl OverallStatus {
    /// Returns the wire representation of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            OverallStatus::Pending => "Pending",
            OverallStatus::Approved => "Approved",
            OverallStatus::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derives the overall status of a request.
///
/// Evaluated in precedence order:
///
/// 1. Either approval field `Rejected` ⇒ `Rejected`, regardless of the
///    other field.
/// 2. Working-nature and both fields `Approved` ⇒ `Approved`.
/// 3. Non-working and the rector `Approved` ⇒ `Approved`.
/// 4. Anything else ⇒ `Pending`.
pub fn overall_status(request: &LeaveRequest) -> OverallStatus {
    if request.coordinator_approval == ApprovalStatus::Rejected
        || request.rector_approval == ApprovalStatus::Rejected
    {
        return OverallStatus::Rejected;
    }

    match request.nature_of_leave {
        NatureOfLeave::Working => {
            if request.coordinator_approval == ApprovalStatus::Approved
                && request.rector_approval == ApprovalStatus::Approved
            {
                return OverallStatus::Approved;
            }
        }
        NatureOfLeave::NonWorking => {
            if request.rector_approval == ApprovalStatus::Approved {
                return OverallStatus::Approved;
            }
        }
    }

    OverallStatus::Pending
}
