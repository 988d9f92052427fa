//! Configuration data structures.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::StaffRole;

/// Identifying metadata for the hostel this engine serves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostelMetadata {
    /// Display name of the hostel.
    pub name: String,
    /// Short code used in logs and reports.
    pub code: String,
}

/// Policy for generating leave reference numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferencePolicy {
    /// Prefix carried by every reference number.
    pub prefix: String,
    /// Number of base-36 characters after the prefix.
    pub token_length: usize,
    /// How many generation attempts to make before giving up when the
    /// store reports a collision.
    pub max_attempts: u32,
}

impl Default for ReferencePolicy {
    fn default() -> Self {
        Self {
            prefix: crate::approval::REFERENCE_PREFIX.to_string(),
            token_length: crate::approval::REFERENCE_TOKEN_LENGTH,
            max_attempts: 8,
        }
    }
}

/// A staff member authorized to decide leave requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMember {
    /// Identifier presented with approval actions.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The role this member holds.
    pub role: StaffRole,
}

/// The complete engine configuration.
#[derive(Debug, Clone)]
pub struct HostelConfig {
    metadata: HostelMetadata,
    reference: ReferencePolicy,
    staff: Vec<StaffMember>,
}

impl HostelConfig {
    /// Creates a configuration from its parts.
    pub fn new(
        metadata: HostelMetadata,
        reference: ReferencePolicy,
        staff: Vec<StaffMember>,
    ) -> Self {
        Self {
            metadata,
            reference,
            staff,
        }
    }

    /// Returns the hostel metadata.
    pub fn metadata(&self) -> &HostelMetadata {
        &self.metadata
    }

    /// Returns the reference-number policy.
    pub fn reference(&self) -> &ReferencePolicy {
        &self.reference
    }

    /// Returns the configured staff directory.
    pub fn staff(&self) -> &[StaffMember] {
        &self.staff
    }

    /// Resolves a staff identity against the directory.
    ///
    /// Every engine call that acts on behalf of a staff member passes an
    /// explicit `staff_id`/`role` pair; there is no ambient current-user
    /// state. Returns [`EngineError::UnknownStaff`] when the id is not
    /// registered under that role.
    pub fn authenticate(&self, staff_id: &str, role: StaffRole) -> EngineResult<&StaffMember> {
        self.staff
            .iter()
            .find(|member| member.id == staff_id && member.role == role)
            .ok_or_else(|| EngineError::UnknownStaff {
                staff_id: staff_id.to_string(),
                role,
            })
    }
}
