//! Transition guarding and application.
//!
//! Every approval action writes exactly one field of one record. This
//! module decides whether a proposed write is legal and produces the
//! updated record when it is.

use crate::error::{EngineError, EngineResult};
use crate::models::{
    ApprovalDecision, ApprovalField, ApprovalStatus, LeaveRequest, NatureOfLeave, StaffRole,
};

/// Checks that a staff role may act on the given approval field right now.
///
/// # Rules
///
/// * The targeted field must be exactly the one the role owns
///   (`WrongApprovalTarget` otherwise).
/// * The coordinator cannot act on non-working leaves; their stage is
///   skipped (`CoordinatorSkipped`).
/// * A field holding a terminal decision cannot be written again
///   (`AlreadyDecided`). Re-approving or re-rejecting is a rule
///   violation, not a silent overwrite.
/// * The rector cannot act on a working-nature leave until the
///   coordinator has approved it (`AwaitingCoordinator`).
///
/// # Returns
///
/// Returns `Ok(())` when the transition is legal, or the specific
/// rule-violation error.
pub fn ensure_actionable(
    request: &LeaveRequest,
    role: StaffRole,
    field: ApprovalField,
) -> EngineResult<()> {
    if field != role.owned_field() {
        return Err(EngineError::WrongApprovalTarget { role, field });
    }

    match role {
        StaffRole::Coordinator => {
            if request.nature_of_leave == NatureOfLeave::NonWorking {
                return Err(EngineError::CoordinatorSkipped {
                    reference_no: request.reference_no.clone(),
                });
            }
            if request.coordinator_approval.is_terminal() {
                return Err(EngineError::AlreadyDecided {
                    field,
                    status: request.coordinator_approval,
                });
            }
        }
        StaffRole::Rector => {
            if request.rector_approval.is_terminal() {
                return Err(EngineError::AlreadyDecided {
                    field,
                    status: request.rector_approval,
                });
            }
            if request.nature_of_leave == NatureOfLeave::Working
                && request.coordinator_approval != ApprovalStatus::Approved
            {
                return Err(EngineError::AwaitingCoordinator {
                    reference_no: request.reference_no.clone(),
                });
            }
        }
    }

    Ok(())
}

/// Applies an approval decision, returning the updated record.
///
/// Precondition checks are delegated to [`ensure_actionable`]; on success
/// the role's owned field is set to the decision and every other field is
/// untouched.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use leave_engine::approval::apply_approval;
/// use leave_engine::models::{
///     ApprovalDecision, ApprovalField, ApprovalStatus, LeaveRequest, LeaveSubmission,
///     NatureOfLeave, StaffRole,
/// };
///
/// let submission = LeaveSubmission {
///     student_id: "S1001".to_string(),
///     student_name: "John Doe".to_string(),
///     room_no: "A-205".to_string(),
///     departure: "2026-02-10T08:30:00".parse().unwrap(),
///     arrival: "2026-02-12".parse().unwrap(),
///     reason: "Family function".to_string(),
///     destination: "Pune".to_string(),
///     guardian_name: "R. Doe".to_string(),
///     guardian_contact: "9876543210".to_string(),
///     nature_of_leave: NatureOfLeave::Working,
/// };
/// let record = LeaveRequest::from_submission("HLM-TEST".to_string(), submission, Utc::now());
///
/// let updated = apply_approval(
///     &record,
///     StaffRole::Coordinator,
///     ApprovalField::Coordinator,
///     ApprovalDecision::Approved,
/// )
/// .unwrap();
/// assert_eq!(updated.coordinator_approval, ApprovalStatus::Approved);
/// assert_eq!(updated.rector_approval, ApprovalStatus::Pending);
/// ```
pub fn apply_approval(
    request: &LeaveRequest,
    role: StaffRole,
    field: ApprovalField,
    decision: ApprovalDecision,
) -> EngineResult<LeaveRequest> {
    ensure_actionable(request, role, field)?;

    let mut updated = request.clone();
    match field {
        ApprovalField::Coordinator => updated.coordinator_approval = decision.status(),
        ApprovalField::Rector => updated.rector_approval = decision.status(),
    }

    Ok(updated)
}
