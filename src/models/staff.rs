//! Staff roles and the approval fields they own.
//!
//! Approval fields are closed enums rather than free-form names, so no
//! dynamic field name ever reaches the store.

use serde::{Deserialize, Serialize};

use super::leave_request::ApprovalStatus;

/// The staff roles that take part in the approval workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    /// First-stage approver for working-nature leaves.
    Coordinator,
    /// Final approver for every leave request.
    Rector,
}

impl StaffRole {
    /// Returns the single approval field this role is allowed to write.
    pub fn owned_field(self) -> ApprovalField {
        match self {
            StaffRole::Coordinator => ApprovalField::Coordinator,
            StaffRole::Rector => ApprovalField::Rector,
        }
    }

    /// Returns the wire representation of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            StaffRole::Coordinator => "coordinator",
            StaffRole::Rector => "rector",
        }
    }
}

impl std::fmt::Display for StaffRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one of the two approval fields on a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalField {
    /// The `coordinator_approval` field.
    #[serde(rename = "coordinator_approval")]
    Coordinator,
    /// The `rector_approval` field.
    #[serde(rename = "rector_approval")]
    Rector,
}

impl ApprovalField {
    /// Returns the wire representation of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            ApprovalField::Coordinator => "coordinator_approval",
            ApprovalField::Rector => "rector_approval",
        }
    }
}

impl std::fmt::Display for ApprovalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The decisions a staff member may record on their approval field.
///
/// Deliberately narrower than [`ApprovalStatus`]: neither `Pending` nor
/// `N/A` can ever be written through an approval action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalDecision {
    /// Approve the request at this stage.
    Approved,
    /// Reject the request at this stage.
    Rejected,
}

impl ApprovalDecision {
    /// Converts the decision into the status it writes.
    pub fn status(self) -> ApprovalStatus {
        match self {
            ApprovalDecision::Approved => ApprovalStatus::Approved,
            ApprovalDecision::Rejected => ApprovalStatus::Rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_own_their_fields() {
        assert_eq!(
            StaffRole::Coordinator.owned_field(),
            ApprovalField::Coordinator
        );
        assert_eq!(StaffRole::Rector.owned_field(), ApprovalField::Rector);
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(
            serde_json::to_string(&StaffRole::Coordinator).unwrap(),
            "\"coordinator\""
        );
        assert_eq!(
            serde_json::to_string(&StaffRole::Rector).unwrap(),
            "\"rector\""
        );
    }

    #[test]
    fn test_field_serialization_matches_wire_names() {
        assert_eq!(
            serde_json::to_string(&ApprovalField::Coordinator).unwrap(),
            "\"coordinator_approval\""
        );
        assert_eq!(
            serde_json::to_string(&ApprovalField::Rector).unwrap(),
            "\"rector_approval\""
        );
    }

    #[test]
    fn test_unknown_field_name_is_rejected() {
        let result = serde_json::from_str::<ApprovalField>("\"overall_status\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_decision_converts_to_terminal_status() {
        assert_eq!(ApprovalDecision::Approved.status(), ApprovalStatus::Approved);
        assert_eq!(ApprovalDecision::Rejected.status(), ApprovalStatus::Rejected);
        assert!(ApprovalDecision::Approved.status().is_terminal());
    }

    #[test]
    fn test_decision_rejects_pending() {
        let result = serde_json::from_str::<ApprovalDecision>("\"Pending\"");
        assert!(result.is_err());
    }
}
