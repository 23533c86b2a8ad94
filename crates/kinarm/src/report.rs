//! Serializable views of the simulation for display.

use crate::{
    host::{TargetOutcome, TargetStatus},
    viewport::Viewport,
};
use kinarm_core::{Arm, Point, Rig};
use serde::Serialize;

const DECIMALS: f64 = 1e5;

/// Round to five decimal places, folding negative zero into zero.
fn round(value: f64) -> f64 {
    (value * DECIMALS).round() / DECIMALS + 0.0
}

fn round_point(p: Point) -> Point {
    Point::new(round(p.x), round(p.y))
}

fn round_arm(arm: Arm) -> Arm {
    Arm::new(round(arm.length), round(arm.angle))
}

/// Live data for a rig: its inputs and the joint positions they produce.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub origin: Point,
    pub arm1: Arm,
    pub arm2: Arm,
    pub arm1_end: Point,
    pub arm2_end: Point,
}

impl Report {
    pub fn new(rig: &Rig) -> Self {
        let pose = rig.pose();
        Self {
            origin: round_point(rig.origin),
            arm1: round_arm(rig.arm1),
            arm2: round_arm(rig.arm2),
            arm1_end: round_point(pose.arm1_end),
            arm2_end: round_point(pose.arm2_end),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// The reachable ring, in canvas coordinates, for the range indicators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeReport {
    pub center: Point,
    pub inner: f64,
    pub outer: f64,
}

impl RangeReport {
    pub fn new(rig: &Rig, viewport: &Viewport) -> Self {
        let annulus = rig.annulus();
        Self {
            center: viewport.to_canvas(rig.origin),
            inner: round(annulus.inner),
            outer: round(annulus.outer),
        }
    }
}

/// One line of trace output: a pointer event and where it left the arm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceRecord {
    pub screen: Point,
    pub target: Point,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub report: Report,
}

impl TraceRecord {
    pub fn new(screen: Point, target: Point, outcome: &TargetOutcome, rig: &Rig) -> Self {
        let (requested, error) = match outcome.status {
            TargetStatus::Solved => (None, None),
            TargetStatus::Clamped { requested } => (Some(requested), None),
            TargetStatus::Held { error } => (None, Some(error.to_string())),
        };
        Self {
            screen,
            target: round_point(target),
            status: outcome.status.name(),
            requested,
            error,
            report: Report::new(rig),
        }
    }

    /// A target that was refused outright; the arm did not move.
    pub fn rejected(screen: Point, target: Point, error: String, rig: &Rig) -> Self {
        Self {
            screen,
            target: round_point(target),
            status: "rejected",
            requested: None,
            error: Some(error),
            report: Report::new(rig),
        }
    }
}
