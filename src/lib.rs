//! Leave Approval Engine for hostel leave requests.
//!
//! This crate implements the two-stage approval workflow for hostel leave
//! applications: students submit requests, a coordinator clears
//! working-nature leaves first, and a rector gives the final decision.
//! The engine provides the state-machine rules (visibility gating,
//! transition guarding, and overall status derivation), a persistence
//! abstraction, and an HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod approval;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
