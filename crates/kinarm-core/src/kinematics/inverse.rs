// Inverse kinematics

use super::{Result, SolveError, Solution};
use crate::geometry::{Point, ReachableAnnulus, TriangleError, distance, law_of_cosines};
use std::f64::consts::PI;

/// Joint angles that put the end effector on `target`, given relative to
/// the arm's base.
///
/// The shoulder sits on the counterclockwise side of the base-to-target
/// line: the inside angle at the base is added to the bearing of the
/// target rather than subtracted. The mirrored elbow is never produced.
///
/// Fails instead of returning NaN angles when the target lies outside the
/// reachable annulus or an arm has no length.
///
/// A target on the base with arms of different lengths sits inside the
/// inner radius, so it reports [`SolveError::UnreachableTarget`] rather
/// than [`SolveError::DegenerateTriangle`], which is kept for arms with
/// zero or negative length.
pub fn solve_inverse(target: Point, arm1_length: f64, arm2_length: f64) -> Result<Solution> {
    if !target.is_finite() || !arm1_length.is_finite() || !arm2_length.is_finite() {
        return Err(SolveError::NonFinite);
    }

    if !(arm1_length > 0.0 && arm2_length > 0.0) {
        return Err(SolveError::DegenerateTriangle {
            arm1_length,
            arm2_length,
        });
    }

    let annulus = ReachableAnnulus::new(arm1_length, arm2_length);
    let dist = distance(target);
    let unreachable = SolveError::UnreachableTarget {
        distance: dist,
        inner: annulus.inner,
        outer: annulus.outer,
    };

    if !annulus.contains_distance(dist) {
        return Err(unreachable);
    }

    if dist == 0.0 {
        // Folded back onto the base. Every shoulder angle works, so take the
        // bearing atan2(0, 0) = 0 regardless of the zeros' signs.
        return Ok(Solution {
            arm1_angle: 0.0,
            arm2_angle: PI,
        });
    }

    // absorb the reach slack so the cosines stay within [-1, 1]
    let dist = dist.clamp(annulus.inner, annulus.outer);

    let triangle = |err: TriangleError| match err {
        TriangleError::Degenerate { .. } => SolveError::DegenerateTriangle {
            arm1_length,
            arm2_length,
        },
        TriangleError::OutOfDomain { .. } => unreachable,
    };

    let inside_arm1_angle = law_of_cosines(dist, arm1_length, arm2_length).map_err(triangle)?;
    let outside_arm1_angle = target.y.atan2(target.x);

    let inside_arm2_angle = law_of_cosines(arm1_length, arm2_length, dist).map_err(triangle)?;

    Ok(Solution {
        arm1_angle: outside_arm1_angle + inside_arm1_angle,
        arm2_angle: PI + inside_arm2_angle,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics::{Arm, solve_forward};

    fn reach(solution: Solution, arm1_length: f64, arm2_length: f64) -> Point {
        solve_forward(
            Point::ORIGIN,
            Arm::new(arm1_length, solution.arm1_angle),
            Arm::new(arm2_length, solution.arm2_angle),
        )
        .arm2_end
    }

    fn assert_reaches(target: Point, arm1_length: f64, arm2_length: f64) -> Solution {
        let solution = solve_inverse(target, arm1_length, arm2_length).unwrap();
        let end = reach(solution, arm1_length, arm2_length);
        assert!(
            (end - target).length() < 1e-9,
            "{end:?} misses {target:?} with {solution:?}"
        );
        solution
    }

    #[test]
    fn equal_arms_partially_extended() {
        let solution = assert_reaches(Point::new(150.0, 0.0), 100.0, 100.0);
        assert!((solution.arm1_angle - 0.75f64.acos()).abs() < 1e-12);
        assert!((solution.arm1_angle - 0.7227).abs() < 1e-4);
        assert!((solution.arm2_angle - (PI + (-0.125f64).acos())).abs() < 1e-12);
    }

    #[test]
    fn elbow_sits_counterclockwise_of_target_line() {
        for target in [
            Point::new(150.0, 0.0),
            Point::new(-20.0, 90.0),
            Point::new(-60.0, -110.0),
            Point::new(10.0, -30.0),
        ] {
            let solution = assert_reaches(target, 100.0, 80.0);
            let elbow = Point::polar(100.0, solution.arm1_angle);
            let cross = target.x * elbow.y - target.y * elbow.x;
            assert!(cross >= 0.0, "elbow {elbow:?} for {target:?}");
        }
    }

    #[test]
    fn default_configuration_without_origin_offset_is_unreachable() {
        let err = solve_inverse(Point::new(450.0, 50.0), 225.0, 200.0).unwrap_err();
        match err {
            SolveError::UnreachableTarget {
                distance,
                inner,
                outer,
            } => {
                assert!((distance - 452.7693).abs() < 1e-4);
                assert_eq!(inner, 25.0);
                assert_eq!(outer, 425.0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn default_configuration_relative_to_origin_is_reachable() {
        // target (450, 50) seen from the default base at (60, 105)
        assert_reaches(Point::new(390.0, -55.0), 225.0, 200.0);
    }

    #[test]
    fn outer_boundary_is_inclusive() {
        let solution = assert_reaches(Point::new(200.0, 0.0), 100.0, 100.0);
        assert_eq!(solution.arm1_angle, 0.0);
        assert!((solution.arm2_angle - 2.0 * PI).abs() < 1e-12);

        // off-axis points land within rounding of the rim
        assert!(solve_inverse(Point::polar(425.0, 1.0), 225.0, 200.0).is_ok());
        assert!(solve_inverse(Point::polar(425.0, -2.5), 200.0, 225.0).is_ok());
    }

    #[test]
    fn inner_boundary_is_inclusive() {
        let solution = assert_reaches(Point::new(40.0, 0.0), 100.0, 60.0);
        assert_eq!(solution.arm1_angle, 0.0);
        assert_eq!(solution.arm2_angle, PI);

        assert!(solve_inverse(Point::polar(25.0, 2.0), 225.0, 200.0).is_ok());
    }

    #[test]
    fn beyond_outer_radius_is_unreachable() {
        let result = solve_inverse(Point::new(200.0 + 1e-6, 0.0), 100.0, 100.0);
        assert!(matches!(
            result,
            Err(SolveError::UnreachableTarget { outer, .. }) if outer == 200.0
        ));
    }

    #[test]
    fn inside_inner_radius_is_unreachable() {
        let result = solve_inverse(Point::new(0.0, 10.0), 100.0, 60.0);
        assert!(matches!(
            result,
            Err(SolveError::UnreachableTarget { inner, .. }) if inner == 40.0
        ));
    }

    #[test]
    fn solves_at_any_finite_scale() {
        for scale in [1e155, 1e-200] {
            let solution = solve_inverse(Point::new(1.5 * scale, 0.0), scale, scale).unwrap();
            assert!((solution.arm1_angle - 0.75f64.acos()).abs() < 1e-12);
            assert!((solution.arm2_angle - (PI + (-0.125f64).acos())).abs() < 1e-12);
        }

        // fully stretched along +x, right on the outer rim
        let solution = solve_inverse(Point::new(3e-200, 0.0), 2e-200, 1e-200).unwrap();
        assert!(solution.arm1_angle.abs() < 1e-12);
        let end = reach(solution, 2e-200, 1e-200);
        assert!((end - Point::new(3e-200, 0.0)).length() < 1e-9 * 3e-200);

        let target = Point::new(-1.2e154, 0.9e154);
        let solution = solve_inverse(target, 1e154, 0.8e154).unwrap();
        let end = reach(solution, 1e154, 0.8e154);
        assert!((end - target).length() < 1e-9 * 1.8e154);
    }

    #[test]
    fn zero_length_arm_is_degenerate() {
        assert_eq!(
            solve_inverse(Point::new(1.0, 0.0), 0.0, 1.0),
            Err(SolveError::DegenerateTriangle {
                arm1_length: 0.0,
                arm2_length: 1.0
            })
        );
        assert!(matches!(
            solve_inverse(Point::new(1.0, 0.0), 1.0, 0.0),
            Err(SolveError::DegenerateTriangle { .. })
        ));
        assert!(matches!(
            solve_inverse(Point::new(1.0, 0.0), -1.0, 2.0),
            Err(SolveError::DegenerateTriangle { .. })
        ));
    }

    #[test]
    fn target_on_base_with_equal_arms_folds_back() {
        for target in [Point::ORIGIN, Point::new(-0.0, -0.0)] {
            let solution = solve_inverse(target, 50.0, 50.0).unwrap();
            assert_eq!(solution.arm1_angle, 0.0);
            assert_eq!(solution.arm2_angle, PI);
            assert!(reach(solution, 50.0, 50.0).length() < 1e-9);
        }
    }

    #[test]
    fn target_on_base_with_unequal_arms_is_unreachable() {
        assert!(matches!(
            solve_inverse(Point::ORIGIN, 50.0, 40.0),
            Err(SolveError::UnreachableTarget { distance, .. }) if distance == 0.0
        ));
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        assert_eq!(
            solve_inverse(Point::new(f64::NAN, 0.0), 1.0, 1.0),
            Err(SolveError::NonFinite)
        );
        assert_eq!(
            solve_inverse(Point::new(1.0, 0.0), f64::INFINITY, 1.0),
            Err(SolveError::NonFinite)
        );
    }

    #[test]
    fn round_trips_through_forward_kinematics() {
        let origin = Point::new(60.0, 105.0);
        for (l1, l2, t1, t2) in [
            (225.0, 200.0, 0.5, 5.0),
            (100.0, 100.0, -1.0, 2.0),
            (30.0, 120.0, 3.0, -0.7),
            (5.0, 1.0, 12.0, 1.1),
        ] {
            let pose = solve_forward(origin, Arm::new(l1, t1), Arm::new(l2, t2));
            let solution = solve_inverse(pose.arm2_end - origin, l1, l2).unwrap();
            let again = solve_forward(
                origin,
                Arm::new(l1, solution.arm1_angle),
                Arm::new(l2, solution.arm2_angle),
            );
            assert!(
                (again.arm2_end - pose.arm2_end).length() < 1e-9,
                "{again:?} != {pose:?}"
            );
        }
    }

    #[test]
    fn round_trip_property() {
        bolero::check!()
            .with_type::<(u16, u16, i16, i16)>()
            .cloned()
            .for_each(|(l1, l2, t1, t2)| {
                let l1 = 1.0 + f64::from(l1 % 1000);
                let l2 = 1.0 + f64::from(l2 % 1000);
                let t1 = f64::from(t1) / 1000.0;
                let t2 = f64::from(t2) / 1000.0;

                let target =
                    solve_forward(Point::ORIGIN, Arm::new(l1, t1), Arm::new(l2, t2)).arm2_end;
                let annulus = ReachableAnnulus::new(l1, l2);
                let margin = 1e-6 * annulus.outer;
                let dist = target.length();
                let solution = solve_inverse(target, l1, l2).unwrap();

                // near the rim the arccos is too ill-conditioned for a tight bound
                if dist < annulus.inner + margin || dist > annulus.outer - margin {
                    assert!(solution.arm1_angle.is_finite());
                    assert!(solution.arm2_angle.is_finite());
                    return;
                }

                let end = reach(solution, l1, l2);
                assert!((end - target).length() < 1e-7 * annulus.outer);
            });
    }

    #[test]
    fn never_returns_nan() {
        bolero::check!()
            .with_type::<(f64, f64, f64, f64)>()
            .cloned()
            .for_each(|(x, y, l1, l2)| {
                if let Ok(solution) = solve_inverse(Point::new(x, y), l1, l2) {
                    assert!(!solution.arm1_angle.is_nan());
                    assert!(!solution.arm2_angle.is_nan());
                }
            });
    }
}
