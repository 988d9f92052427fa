//! In-memory store implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::approval::{is_pending_for, was_decided_by};
use crate::error::{EngineError, EngineResult};
use crate::models::{ApprovalField, ApprovalStatus, LeaveRequest, StaffRole};

use super::LeaveStore;

/// A [`LeaveStore`] backed by a `RwLock`-protected map.
///
/// Single-field writes take the write lock, so same-field updates on the
/// same record are serialized and the compare-and-set in
/// [`LeaveStore::apply_decision`] holds. List results are sorted by
/// creation time with the reference number as a tiebreaker so ordering
/// stays deterministic.
#[derive(Debug, Default)]
pub struct MemoryLeaveStore {
    records: RwLock<HashMap<String, LeaveRequest>>,
}

impl MemoryLeaveStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_failure() -> EngineError {
        EngineError::Store {
            message: "record map lock poisoned".to_string(),
        }
    }

    fn collect_sorted<F>(&self, predicate: F, newest_first: bool) -> EngineResult<Vec<LeaveRequest>>
    where
        F: Fn(&LeaveRequest) -> bool,
    {
        let records = self.records.read().map_err(|_| Self::lock_failure())?;

        let mut matches: Vec<LeaveRequest> = records
            .values()
            .filter(|record| predicate(record))
            .cloned()
            .collect();

        matches.sort_by(|a, b| {
            let ordering = a
                .created_at
                .cmp(&b.created_at)
                .then_with(|| a.reference_no.cmp(&b.reference_no));
            if newest_first {
                ordering.reverse()
            } else {
                ordering
            }
        });

        Ok(matches)
    }
}

impl LeaveStore for MemoryLeaveStore {
    fn insert(&self, record: LeaveRequest) -> EngineResult<()> {
        let mut records = self.records.write().map_err(|_| Self::lock_failure())?;

        if records.contains_key(&record.reference_no) {
            return Err(EngineError::DuplicateReference {
                reference_no: record.reference_no,
            });
        }

        records.insert(record.reference_no.clone(), record);
        Ok(())
    }

    fn get(&self, reference_no: &str) -> EngineResult<Option<LeaveRequest>> {
        let records = self.records.read().map_err(|_| Self::lock_failure())?;
        Ok(records.get(reference_no).cloned())
    }

    fn apply_decision(
        &self,
        reference_no: &str,
        field: ApprovalField,
        status: ApprovalStatus,
    ) -> EngineResult<LeaveRequest> {
        let mut records = self.records.write().map_err(|_| Self::lock_failure())?;

        let record = records
            .get_mut(reference_no)
            .ok_or_else(|| EngineError::LeaveNotFound {
                reference_no: reference_no.to_string(),
            })?;

        let slot = match field {
            ApprovalField::Coordinator => &mut record.coordinator_approval,
            ApprovalField::Rector => &mut record.rector_approval,
        };

        // Compare-and-set: only a still-pending field may transition.
        if *slot != ApprovalStatus::Pending {
            return Err(EngineError::AlreadyDecided {
                field,
                status: *slot,
            });
        }

        *slot = status;
        Ok(record.clone())
    }

    fn for_student(&self, student_id: &str) -> EngineResult<Vec<LeaveRequest>> {
        self.collect_sorted(|record| record.student_id == student_id, true)
    }

    fn pending_for(&self, role: StaffRole) -> EngineResult<Vec<LeaveRequest>> {
        self.collect_sorted(|record| is_pending_for(record, role), false)
    }

    fn decided_by(&self, role: StaffRole) -> EngineResult<Vec<LeaveRequest>> {
        self.collect_sorted(|record| was_decided_by(record, role), true)
    }
}
