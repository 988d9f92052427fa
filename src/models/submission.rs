//! Submission input for creating a leave request.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::leave_request::NatureOfLeave;

/// The attribute set a student provides when applying for leave.
///
/// All fields become immutable once the request is created; the approval
/// fields, reference number, and creation timestamp are generated by the
/// engine (see [`crate::models::LeaveRequest::from_submission`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveSubmission {
    /// Identifier of the requesting student.
    pub student_id: String,
    /// Display name of the requesting student.
    pub student_name: String,
    /// Hostel room number of the requesting student.
    pub room_no: String,
    /// Departure date and time.
    pub departure: NaiveDateTime,
    /// Return date.
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
}
