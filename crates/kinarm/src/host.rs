use kinarm_core::{Arm, Point, Pose, Rig, SolveError};
use serde::{Deserialize, Serialize};

/// What to do when a new target cannot be solved.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum UnreachablePolicy {
    /// Keep the last valid joint angles and report the failure.
    #[default]
    Hold,
    /// Aim at the reachable point closest to the target instead.
    Clamp,
    /// Hand the failure back to the caller.
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetStatus {
    Solved,
    Clamped { requested: Point },
    Held { error: SolveError },
}

impl TargetStatus {
    pub fn name(&self) -> &'static str {
        match self {
            TargetStatus::Solved => "solved",
            TargetStatus::Clamped { .. } => "clamped",
            TargetStatus::Held { .. } => "held",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetOutcome {
    pub status: TargetStatus,
    pub pose: Pose,
}

/// Owns the current rig and replaces it wholesale on every edit.
#[derive(Debug, Clone)]
pub struct Simulation {
    rig: Rig,
    policy: UnreachablePolicy,
}

impl Simulation {
    pub fn new(rig: Rig, policy: UnreachablePolicy) -> Self {
        Self { rig, policy }
    }

    pub fn rig(&self) -> &Rig {
        &self.rig
    }

    pub fn pose(&self) -> Pose {
        self.rig.pose()
    }

    /// Solve for a new target and return the resulting pose.
    ///
    /// Only fails under [`UnreachablePolicy::Reject`], in which case the
    /// simulation is left exactly as it was.
    pub fn set_target(&mut self, target: Point) -> Result<TargetOutcome, SolveError> {
        self.aim(Rig { target, ..self.rig })
    }

    /// Change both arm lengths and re-aim at the current target.
    ///
    /// A target the new lengths cannot reach goes through the same policy
    /// as [`Simulation::set_target`]. Under `Hold` the lengths still
    /// change and the old angles stay.
    pub fn set_lengths(
        &mut self,
        arm1_length: f64,
        arm2_length: f64,
    ) -> Result<TargetOutcome, SolveError> {
        self.aim(self.rig.with_lengths(arm1_length, arm2_length))
    }

    /// Adopt `rig` with its angles solved for its own target.
    fn aim(&mut self, rig: Rig) -> Result<TargetOutcome, SolveError> {
        let target = rig.target;
        let error = match rig.resolve() {
            Ok(solved) => {
                self.rig = solved;
                tracing::debug!(
                    "Solved target ({}, {}): arm1 {:.5} rad, arm2 {:.5} rad",
                    target.x,
                    target.y,
                    solved.arm1.angle,
                    solved.arm2.angle
                );
                return Ok(self.outcome(TargetStatus::Solved));
            }
            Err(error) => error,
        };

        tracing::warn!("Target ({}, {}) not solved: {}", target.x, target.y, error);

        match self.policy {
            UnreachablePolicy::Reject => Err(error),
            UnreachablePolicy::Clamp => match clamped(&rig) {
                Ok(clamped) => {
                    tracing::debug!(
                        "Clamped target ({}, {}) to ({:.5}, {:.5})",
                        target.x,
                        target.y,
                        clamped.target.x,
                        clamped.target.y
                    );
                    self.rig = clamped;
                    Ok(self.outcome(TargetStatus::Clamped { requested: target }))
                }
                Err(error) => Ok(self.hold(rig, error)),
            },
            UnreachablePolicy::Hold => Ok(self.hold(rig, error)),
        }
    }

    fn hold(&mut self, rig: Rig, error: SolveError) -> TargetOutcome {
        self.rig = rig;
        self.outcome(TargetStatus::Held { error })
    }

    fn outcome(&self, status: TargetStatus) -> TargetOutcome {
        TargetOutcome {
            status,
            pose: self.rig.pose(),
        }
    }

    pub fn set_arm1(&mut self, arm1: Arm) {
        self.rig = Rig { arm1, ..self.rig };
    }

    pub fn set_arm2(&mut self, arm2: Arm) {
        self.rig = Rig { arm2, ..self.rig };
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.rig = self.rig.with_origin(origin);
    }
}

/// `rig` aimed at the reachable point nearest its target.
fn clamped(rig: &Rig) -> Result<Rig, SolveError> {
    let nearest = rig.annulus().nearest(rig.relative_target());
    rig.retarget(rig.origin + nearest)
}
