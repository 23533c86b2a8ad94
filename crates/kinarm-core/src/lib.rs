//! Kinematics engine for a two-link planar arm.
//!
//! Forward kinematics maps arm lengths and joint angles to joint
//! positions; inverse kinematics maps a target point back to joint angles
//! using the law of cosines. Everything here is a pure function of its
//! inputs: there is no I/O, logging, or shared state in this crate.

pub mod geometry;
pub mod kinematics;
pub mod rig;

pub use geometry::{Point, ReachableAnnulus};
pub use kinematics::{Arm, Pose, SolveError, Solution, solve_forward, solve_inverse};
pub use rig::Rig;
