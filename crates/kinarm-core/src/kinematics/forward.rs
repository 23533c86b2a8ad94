// Forward kinematics

use super::{Arm, Pose};
use crate::geometry::Point;

/// Position the elbow and end effector of an arm based at `origin`.
///
/// Total over its inputs: a zero length simply collapses that joint onto
/// the one before it.
pub fn solve_forward(origin: Point, arm1: Arm, arm2: Arm) -> Pose {
    let arm1_end = origin + Point::polar(arm1.length, arm1.angle);
    let arm2_end = arm1_end + Point::polar(arm2.length, arm1.angle + arm2.angle);
    Pose { arm1_end, arm2_end }
}
