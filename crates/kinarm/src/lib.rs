//! Host side of the two-link arm simulator.
//!
//! Holds the current rig, turns pointer positions into targets, applies an
//! unreachable-target policy, and renders the results for display. All of
//! the kinematics live in `kinarm-core`.

pub mod config;
pub mod host;
pub mod report;
pub mod trace;
pub mod viewport;
