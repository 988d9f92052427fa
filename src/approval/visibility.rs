//! The visibility gate for staff work queues.
//!
//! Sequential approval is enforced here rather than with a queue or a
//! lock: a request simply never appears in the rector's pending list
//! until the coordinator has approved it.

use crate::models::{ApprovalStatus, LeaveRequest, NatureOfLeave, StaffRole};

/// Returns true if the request is awaiting a decision from the given role.
///
/// # Rules
///
/// * Coordinator: their field is `Pending` and the leave is working-nature
///   (non-working leaves skip the coordinator entirely).
/// * Rector: their field is `Pending` and either the leave is non-working,
///   or it is working-nature and the coordinator has already approved.
///
/// A request rejected by the coordinator therefore never reaches the
/// rector's queue.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use leave_engine::approval::is_pending_for;
/// use leave_engine::models::{LeaveRequest, LeaveSubmission, NatureOfLeave, StaffRole};
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
/// // Fresh working leave: coordinator sees it, rector does not yet.
/// assert!(is_pending_for(&record, StaffRole::Coordinator));
/// assert!(!is_pending_for(&record, StaffRole::Rector));
/// ```
pub fn is_pending_for(request: &LeaveRequest, role: StaffRole) -> bool {
    match role {
        StaffRole::Coordinator => {
            request.coordinator_approval == ApprovalStatus::Pending
                && request.nature_of_leave == NatureOfLeave::Working
        }
        StaffRole::Rector => {
            request.rector_approval == ApprovalStatus::Pending
                && (request.nature_of_leave == NatureOfLeave::NonWorking
                    || request.coordinator_approval == ApprovalStatus::Approved)
        }
    }
}

/// Returns true if the given role has recorded a decision on the request.
///
/// Used for staff history listings: a request counts once the role's
/// owned field is `Approved` or `Rejected`.
pub fn was_decided_by(request: &LeaveRequest, role: StaffRole) -> bool {
    let status = match role {
        StaffRole::Coordinator => request.coordinator_approval,
        StaffRole::Rector => request.rector_approval,
    };
    status.is_terminal()
}
