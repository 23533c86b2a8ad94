//! The full input tuple of a simulated arm.
//!
//! A [`Rig`] is never edited in place. Every change produces a new value,
//! so a pose is always computed from angles that were solved together.

use crate::{
    geometry::{Point, ReachableAnnulus},
    kinematics::{Arm, Pose, Result, solve_forward, solve_inverse},
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rig {
    pub origin: Point,
    pub arm1: Arm,
    pub arm2: Arm,
    /// Desired end effector position, in the same frame as `origin`.
    pub target: Point,
}

impl Rig {
    pub const fn new(origin: Point, arm1: Arm, arm2: Arm, target: Point) -> Self {
        Self {
            origin,
            arm1,
            arm2,
            target,
        }
    }

    pub fn pose(&self) -> Pose {
        solve_forward(self.origin, self.arm1, self.arm2)
    }

    pub fn annulus(&self) -> ReachableAnnulus {
        ReachableAnnulus::new(self.arm1.length, self.arm2.length)
    }

    /// The target as seen from the base of the arm.
    pub fn relative_target(&self) -> Point {
        self.target - self.origin
    }

    /// Aim at `target`, replacing both joint angles at once.
    pub fn retarget(&self, target: Point) -> Result<Rig> {
        Rig { target, ..*self }.resolve()
    }

    /// Re-solve for the current target, e.g. after the lengths changed.
    pub fn resolve(&self) -> Result<Rig> {
        let solution = solve_inverse(
            self.relative_target(),
            self.arm1.length,
            self.arm2.length,
        )?;
        Ok(self.with_angles(solution.arm1_angle, solution.arm2_angle))
    }

    pub fn with_angles(&self, arm1_angle: f64, arm2_angle: f64) -> Rig {
        Rig {
            arm1: self.arm1.with_angle(arm1_angle),
            arm2: self.arm2.with_angle(arm2_angle),
            ..*self
        }
    }

    pub fn with_lengths(&self, arm1_length: f64, arm2_length: f64) -> Rig {
        Rig {
            arm1: Arm::new(arm1_length, self.arm1.angle),
            arm2: Arm::new(arm2_length, self.arm2.angle),
            ..*self
        }
    }

    pub fn with_origin(&self, origin: Point) -> Rig {
        Rig { origin, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics::SolveError;

    fn rig() -> Rig {
        Rig::new(
            Point::new(60.0, 105.0),
            Arm::new(225.0, 0.5),
            Arm::new(200.0, 5.0),
            Point::new(450.0, 50.0),
        )
    }

    #[test]
    fn retarget_reaches_absolute_target() {
        let target = Point::new(300.0, 200.0);
        let next = rig().retarget(target).unwrap();
        assert_eq!(next.target, target);
        assert_eq!(next.origin, rig().origin);
        assert_eq!(next.arm1.length, 225.0);
        assert_eq!(next.arm2.length, 200.0);
        assert!((next.pose().arm2_end - target).length() < 1e-9);
    }

    #[test]
    fn failed_retarget_leaves_rig_untouched() {
        let before = rig();
        let err = before.retarget(Point::new(1000.0, 0.0)).unwrap_err();
        assert!(matches!(err, SolveError::UnreachableTarget { .. }));
        assert_eq!(before, rig());
    }

    #[test]
    fn default_target_is_reachable_from_default_origin() {
        let resolved = rig().resolve().unwrap();
        assert_eq!(resolved.relative_target(), Point::new(390.0, -55.0));
        assert!((resolved.pose().arm2_end - resolved.target).length() < 1e-9);
    }

    #[test]
    fn annulus_follows_lengths() {
        let annulus = rig().with_lengths(100.0, 30.0).annulus();
        assert_eq!(annulus, ReachableAnnulus::new(100.0, 30.0));
    }

    #[test]
    fn resolve_after_shortening_arms() {
        let shorter = rig().with_lengths(200.0, 195.0);
        assert_eq!(shorter.arm1.angle, 0.5);

        let resolved = shorter.resolve().unwrap();
        assert_eq!(resolved.arm1.length, 200.0);
        assert_eq!(resolved.arm2.length, 195.0);
        assert!((resolved.pose().arm2_end - resolved.target).length() < 1e-9);

        let err = rig().with_lengths(200.0, 100.0).resolve().unwrap_err();
        assert!(matches!(err, SolveError::UnreachableTarget { .. }));
    }

    #[test]
    fn edits_replace_fields_wholesale() {
        let edited = rig().with_angles(0.0, 0.0).with_origin(Point::ORIGIN);
        assert_eq!(edited.pose().arm2_end, Point::new(425.0, 0.0));
        assert_eq!(edited.target, rig().target);
    }
}
