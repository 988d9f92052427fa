//! Submission validation.
//!
//! This module checks the user-correctable constraints on a leave
//! submission before a record is created. Structural constraints
//! (missing fields, malformed dates, unknown enum values) are already
//! enforced by typed deserialization at the HTTP boundary.

use crate::error::{EngineError, EngineResult};
use crate::models::LeaveSubmission;

/// Validates a leave submission.
///
/// # Constraints
///
/// * `student_id` must not be blank; every request needs an owner for
///   history lookups.
/// * `reason` must not be blank.
/// * `arrival` must be strictly after the date portion of `departure`.
///
/// # Returns
///
/// Returns `Ok(())` for a valid submission, or an
/// [`EngineError::Validation`] naming the failing field.
///
/// # Examples
///
/// ```
/// use leave_engine::approval::validate_submission;
/// use leave_engine::models::{LeaveSubmission, NatureOfLeave};
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
/// assert!(validate_submission(&submission).is_ok());
/// ```
pub fn validate_submission(submission: &LeaveSubmission) -> EngineResult<()> {
    if submission.student_id.trim().is_empty() {
        return Err(EngineError::Validation {
            field: "student_id".to_string(),
            message: "must not be empty".to_string(),
        });
    }

    if submission.reason.trim().is_empty() {
        return Err(EngineError::Validation {
            field: "reason".to_string(),
            message: "must not be empty".to_string(),
        });
    }

    if submission.arrival <= submission.departure.date() {
        return Err(EngineError::Validation {
            field: "arrival".to_string(),
            message: format!(
                "must be strictly after the departure date {}",
                submission.departure.date()
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NatureOfLeave;

    fn make_submission() -> LeaveSubmission {
        LeaveSubmission {
            student_id: "S1001".to_string(),
            student_name: "John Doe".to_string(),
            room_no: "A-205".to_string(),
            departure: "2026-02-10T08:30:00".parse().unwrap(),
            arrival: "2026-02-12".parse().unwrap(),
            reason: "Family function".to_string(),
            destination: "Pune".to_string(),
            guardian_name: "R. Doe".to_string(),
            guardian_contact: "9876543210".to_string(),
            nature_of_leave: NatureOfLeave::Working,
        }
    }

    /// VA-001: well-formed submission passes
    #[test]
    fn test_valid_submission_passes() {
        assert!(validate_submission(&make_submission()).is_ok());
    }

    /// VA-002: blank reason is rejected
    #[test]
    fn test_blank_reason_is_rejected() {
        let mut submission = make_submission();
        submission.reason = "   ".to_string();

        match validate_submission(&submission).unwrap_err() {
            EngineError::Validation { field, .. } => assert_eq!(field, "reason"),
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    /// VA-003: blank student id is rejected
    #[test]
    fn test_blank_student_id_is_rejected() {
        let mut submission = make_submission();
        submission.student_id = String::new();

        match validate_submission(&submission).unwrap_err() {
            EngineError::Validation { field, .. } => assert_eq!(field, "student_id"),
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    /// VA-004: arrival on the departure date is rejected (strictly after)
    #[test]
    fn test_arrival_on_departure_date_is_rejected() {
        let mut submission = make_submission();
        submission.arrival = "2026-02-10".parse().unwrap();

        match validate_submission(&submission).unwrap_err() {
            EngineError::Validation { field, .. } => assert_eq!(field, "arrival"),
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    /// VA-005: arrival before departure is rejected
    #[test]
    fn test_arrival_before_departure_is_rejected() {
        let mut submission = make_submission();
        submission.arrival = "2026-02-09".parse().unwrap();

        assert!(validate_submission(&submission).is_err());
    }

    /// VA-006: next-day arrival passes even for a late-night departure
    #[test]
    fn test_next_day_arrival_passes() {
        let mut submission = make_submission();
        submission.departure = "2026-02-10T23:45:00".parse().unwrap();
        submission.arrival = "2026-02-11".parse().unwrap();

        assert!(validate_submission(&submission).is_ok());
    }
}
