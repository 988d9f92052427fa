//! Persistence abstraction for leave requests.
//!
//! The engine only ever needs a handful of record operations, all keyed
//! by reference number. The [`LeaveStore`] trait captures them so the
//! HTTP layer can be exercised against the in-memory implementation and
//! a database-backed store can be swapped in without touching the rules.

mod memory;

pub use memory::MemoryLeaveStore;

use crate::error::EngineResult;
use crate::models::{ApprovalField, ApprovalStatus, LeaveRequest, StaffRole};

/// Storage for leave requests, keyed uniquely by reference number.
///
/// Implementations must be safe to share across request handlers.
pub trait LeaveStore: Send + Sync {
    /// Inserts a newly created record.
    ///
    /// Fails with [`crate::error::EngineError::DuplicateReference`] if a
    /// record already exists under the same reference number; the
    /// submission path uses this to drive its uniqueness retry loop.
    fn insert(&self, record: LeaveRequest) -> EngineResult<()>;

    /// Fetches the record with the given reference number, if any.
    fn get(&self, reference_no: &str) -> EngineResult<Option<LeaveRequest>>;

    /// Writes a terminal status to one approval field of one record.
    ///
    /// This is a compare-and-set: the write succeeds only while the
    /// targeted field is still `Pending`, making each field transition
    /// effectively at-most-once even under concurrent staff actions.
    /// Returns the updated record, or
    /// [`crate::error::EngineError::AlreadyDecided`] when a concurrent
    /// writer got there first, or
    /// [`crate::error::EngineError::LeaveNotFound`] for unknown
    /// references.
    fn apply_decision(
        &self,
        reference_no: &str,
        field: ApprovalField,
        status: ApprovalStatus,
    ) -> EngineResult<LeaveRequest>;

    /// Lists a student's requests, newest first.
    fn for_student(&self, student_id: &str) -> EngineResult<Vec<LeaveRequest>>;

    /// Lists the requests currently awaiting the given role, oldest first.
    ///
    /// Applies the visibility gate
    /// ([`crate::approval::is_pending_for`]): a working-nature leave does
    /// not reach the rector until the coordinator has approved it.
    fn pending_for(&self, role: StaffRole) -> EngineResult<Vec<LeaveRequest>>;

    /// Lists the requests the given role has decided, newest first.
    fn decided_by(&self, role: StaffRole) -> EngineResult<Vec<LeaveRequest>>;
}
