// Two-link arm kinematics

use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod forward;
pub mod inverse;

pub use forward::solve_forward;
pub use inverse::solve_inverse;

/// One link of the arm.
///
/// The first arm's angle is measured in the world frame; the second arm's
/// angle is relative to the direction of the first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Arm {
    pub length: f64,
    /// Radians, not normalized.
    pub angle: f64,
}

impl Arm {
    pub const fn new(length: f64, angle: f64) -> Self {
        Self { length, angle }
    }

    pub const fn with_angle(self, angle: f64) -> Self {
        Self {
            length: self.length,
            angle,
        }
    }
}

/// Joint positions produced by forward kinematics.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// The elbow.
    pub arm1_end: Point,
    /// The end effector.
    pub arm2_end: Point,
}

/// Joint angles produced by inverse kinematics.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub arm1_angle: f64,
    pub arm2_angle: f64,
}

#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum SolveError {
    #[error("target at distance {distance} is outside the reachable annulus [{inner}, {outer}]")]
    UnreachableTarget { distance: f64, inner: f64, outer: f64 },
    #[error("degenerate arm: lengths {arm1_length} and {arm2_length} must both be positive")]
    DegenerateTriangle { arm1_length: f64, arm2_length: f64 },
    #[error("inverse kinematics inputs must be finite")]
    NonFinite,
}

pub type Result<T> = std::result::Result<T, SolveError>;
