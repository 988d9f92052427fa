//! Configuration types and loading for the Leave Approval Engine.
//!
//! The engine is configured from a directory of YAML files holding the
//! hostel metadata, the reference-number policy, and the staff
//! directory used to authenticate approval actions.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{HostelConfig, HostelMetadata, ReferencePolicy, StaffMember};
