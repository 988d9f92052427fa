//! Request types for the Leave Approval Engine API.
//!
//! This module defines the JSON and query-string structures accepted by
//! the endpoints.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{ApprovalDecision, ApprovalField, LeaveSubmission, NatureOfLeave, StaffRole};

/// Request body for `POST /leaves`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitLeaveRequest {
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

impl From<SubmitLeaveRequest> for LeaveSubmission {
    fn from(req: SubmitLeaveRequest) -> Self {
        LeaveSubmission {
            student_id: req.student_id,
            student_name: req.student_name,
            room_no: req.room_no,
            departure: req.departure,
            arrival: req.arrival,
            reason: req.reason,
            destination: req.destination,
            guardian_name: req.guardian_name,
            guardian_contact: req.guardian_contact,
            nature_of_leave: req.nature_of_leave,
        }
    }
}

/// Request body for `POST /leaves/{reference_no}/approval`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovalActionRequest {
    /// Identifier of the acting staff member.
    pub staff_id: String,
    /// Role the staff member is acting under.
    pub role: StaffRole,
    /// The approval field being written.
    pub target: ApprovalField,
    /// The decision to record.
    pub decision: ApprovalDecision,
}

/// Query parameters for the staff list endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct StaffQuery {
    /// Role whose queue or history is requested.
    pub role: StaffRole,
    /// Identifier of the requesting staff member.
    pub staff_id: String,
}

/// Query parameters for `GET /leaves`.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentHistoryQuery {
    /// The student whose history is requested.
    pub student_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_submit_request() {
        let json = r#"{
            "student_id": "S1001",
            "student_name": "John Doe",
            "room_no": "A-205",
            "departure": "2026-02-10T08:30:00",
            "arrival": "2026-02-12",
            "reason": "Family function",
            "destination": "Pune",
            "guardian_name": "R. Doe",
            "guardian_contact": "9876543210",
            "nature_of_leave": "working"
        }"#;

        let request: SubmitLeaveRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.student_id, "S1001");
        assert_eq!(request.nature_of_leave, NatureOfLeave::Working);
    }

    #[test]
    fn test_submit_request_conversion() {
        let request = SubmitLeaveRequest {
            student_id: "S1001".to_string(),
            student_name: "John Doe".to_string(),
            room_no: "A-205".to_string(),
            departure: "2026-02-10T08:30:00".parse().unwrap(),
            arrival: "2026-02-12".parse().unwrap(),
            reason: "Family function".to_string(),
            destination: "Pune".to_string(),
            guardian_name: "R. Doe".to_string(),
            guardian_contact: "9876543210".to_string(),
            nature_of_leave: NatureOfLeave::NonWorking,
        };

        let submission: LeaveSubmission = request.into();
        assert_eq!(submission.student_id, "S1001");
        assert_eq!(submission.nature_of_leave, NatureOfLeave::NonWorking);
    }

    #[test]
    fn test_deserialize_approval_action() {
        let json = r#"{
            "staff_id": "C101",
            "role": "coordinator",
            "target": "coordinator_approval",
            "decision": "Approved"
        }"#;

        let action: ApprovalActionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(action.staff_id, "C101");
        assert_eq!(action.role, StaffRole::Coordinator);
        assert_eq!(action.target, ApprovalField::Coordinator);
        assert_eq!(action.decision, ApprovalDecision::Approved);
    }

    #[test]
    fn test_approval_action_rejects_unknown_target() {
        let json = r#"{
            "staff_id": "C101",
            "role": "coordinator",
            "target": "created_at",
            "decision": "Approved"
        }"#;

        let result = serde_json::from_str::<ApprovalActionRequest>(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_staff_query_roles_parse_lowercase() {
        let query: StaffQuery =
            serde_json::from_str(r#"{"role": "rector", "staff_id": "T999"}"#).unwrap();
        assert_eq!(query.role, StaffRole::Rector);
        assert_eq!(query.staff_id, "T999");
    }
}
