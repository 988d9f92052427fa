//! Leave request model and related types.
//!
//! This module defines the LeaveRequest struct together with the
//! NatureOfLeave and ApprovalStatus enums that drive the approval
//! state machine.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::submission::LeaveSubmission;

/// Classifies a leave request and selects its approval path.
///
/// Working-nature leaves require coordinator approval before the rector
/// may act; non-working leaves go straight to the rector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NatureOfLeave {
    /// Leave taken during working days; coordinator approval required first.
    Working,
    /// Leave outside working days; the coordinator stage is skipped.
    NonWorking,
}

impl NatureOfLeave {
    /// Returns the wire representation of the nature.
    pub fn as_str(self) -> &'static str {
        match self {
            NatureOfLeave::Working => "working",
            NatureOfLeave::NonWorking => "non-working",
        }
    }
}

impl std::fmt::Display for NatureOfLeave {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The status of a single approval field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalStatus {
    /// Awaiting a decision from the owning staff role.
    Pending,
    /// Approved by the owning staff role. Terminal.
    Approved,
    /// Rejected by the owning staff role. Terminal.
    Rejected,
    /// The stage does not apply to this request (coordinator on
    /// non-working leaves). Permanent.
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl ApprovalStatus {
    /// Returns true once a decision has been recorded.
    ///
    /// Terminal fields may not be written again; see
    /// [`crate::approval::ensure_actionable`].
    pub fn is_terminal(self) -> bool {
        matches!(self, ApprovalStatus::Approved | ApprovalStatus::Rejected)
    }

    /// Returns the wire representation of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "Pending",
            ApprovalStatus::Approved => "Approved",
            ApprovalStatus::Rejected => "Rejected",
            ApprovalStatus::NotApplicable => "N/A",
        }
    }
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted hostel leave request.
///
/// Created once on submission and mutated only by single approval-field
/// transitions afterwards; never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique opaque reference number, generated at creation.
    pub reference_no: String,
    /// Identifier of the requesting student.
    pub student_id: String,
    /// Display name of the requesting student.
    pub student_name: String,
    /// Hostel room number of the requesting student.
    pub room_no: String,
    /// Departure date and time.
    pub departure: NaiveDateTime,
    /// Return date. Always strictly after the departure date.
    pub arrival: NaiveDate,
    /// Free-text reason for the leave.
    pub reason: String,
    /// Free-text destination.
    pub destination: String,
    /// Name of the guardian to contact.
    pub guardian_name: String,
    /// Contact number of the guardian.
    pub guardian_contact: String,
    /// The nature of the leave, selecting the approval path.
    pub nature_of_leave: NatureOfLeave,
    /// The coordinator's approval field. `N/A` for non-working leaves.
    pub coordinator_approval: ApprovalStatus,
    /// The rector's approval field.
    pub rector_approval: ApprovalStatus,
    /// Creation timestamp, used for ordering lists.
    pub created_at: DateTime<Utc>,
}

impl LeaveRequest {
    /// Builds a new record from a validated submission.
    ///
    /// Initializes the approval fields according to the nature-of-leave
    /// rule: non-working leaves skip the coordinator stage permanently
    /// (`N/A`), working leaves start with the coordinator `Pending`.
    /// The rector's field always starts `Pending`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use leave_engine::models::{ApprovalStatus, LeaveRequest, LeaveSubmission, NatureOfLeave};
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
    ///     nature_of_leave: NatureOfLeave::NonWorking,
    /// };
    /// let record = LeaveRequest::from_submission("HLM-TEST".to_string(), submission, Utc::now());
    /// assert_eq!(record.coordinator_approval, ApprovalStatus::NotApplicable);
    /// assert_eq!(record.rector_approval, ApprovalStatus::Pending);
    /// ```
    pub fn from_submission(
        reference_no: String,
        submission: LeaveSubmission,
        created_at: DateTime<Utc>,
    ) -> Self {
        let coordinator_approval = match submission.nature_of_leave {
            NatureOfLeave::Working => ApprovalStatus::Pending,
            NatureOfLeave::NonWorking => ApprovalStatus::NotApplicable,
        };

        Self {
            reference_no,
            student_id: submission.student_id,
            student_name: submission.student_name,
            room_no: submission.room_no,
            departure: submission.departure,
            arrival: submission.arrival,
            reason: submission.reason,
            destination: submission.destination,
            guardian_name: submission.guardian_name,
            guardian_contact: submission.guardian_contact,
            nature_of_leave: submission.nature_of_leave,
            coordinator_approval,
            rector_approval: ApprovalStatus::Pending,
            created_at,
        }
    }
}
