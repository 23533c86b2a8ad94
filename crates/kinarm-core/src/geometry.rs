// Planar geometry shared by the solvers and the range display

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};
use thiserror::Error;

/// Slack allowed on a law-of-cosines argument before it is rejected.
///
/// Sides that describe a flat triangle (fully extended or fully folded arm)
/// routinely land a few ulps past +/-1.
pub const COSINE_TOLERANCE: f64 = 1e-9;

/// Slack on the annulus radii, relative to the outer radius.
pub const REACH_TOLERANCE: f64 = 1e-10;

/// A position in the model plane, y pointing up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` along the direction `angle` (radians from +x).
    pub fn polar(radius: f64, angle: f64) -> Self {
        Self {
            x: angle.cos() * radius,
            y: angle.sin() * radius,
        }
    }

    /// Distance from (0, 0).
    pub fn length(self) -> f64 {
        distance(self)
    }

    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Euclidean distance of `p` from (0, 0).
pub fn distance(p: Point) -> f64 {
    p.x.hypot(p.y)
}

#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum TriangleError {
    #[error("degenerate triangle: adjacent sides {a} and {b} must both be positive")]
    Degenerate { a: f64, b: f64 },
    #[error("sides do not form a triangle: cosine {cosine} is outside [-1, 1]")]
    OutOfDomain { cosine: f64 },
}

/// Angle between sides `a` and `b` of a triangle whose third side is `c`.
///
/// Arguments that overshoot [-1, 1] by no more than [`COSINE_TOLERANCE`]
/// are clamped; anything further out is an error rather than NaN.
///
/// The sides are normalized by the longest one first, so any finite
/// triangle works no matter how large or small its units are.
pub fn law_of_cosines(a: f64, b: f64, c: f64) -> Result<f64, TriangleError> {
    if !(a > 0.0 && b > 0.0) || !a.is_finite() || !b.is_finite() {
        return Err(TriangleError::Degenerate { a, b });
    }

    // squaring the raw sides overflows past ~1e154 and underflows below ~1e-154
    let longest = a.max(b).max(c);
    let (a, b, c) = (a / longest, b / longest, c / longest);

    let cosine = (a * a + b * b - c * c) / (2.0 * a * b);
    // also rejects NaN
    if !(cosine.abs() <= 1.0 + COSINE_TOLERANCE) {
        return Err(TriangleError::OutOfDomain { cosine });
    }

    Ok(cosine.clamp(-1.0, 1.0).acos())
}

/// Ring of points reachable by a two-link arm, centered on its base.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReachableAnnulus {
    pub inner: f64,
    pub outer: f64,
}

impl ReachableAnnulus {
    pub fn new(arm1_length: f64, arm2_length: f64) -> Self {
        Self {
            inner: (arm1_length - arm2_length).abs(),
            outer: arm1_length + arm2_length,
        }
    }

    fn slack(&self) -> f64 {
        self.outer * REACH_TOLERANCE
    }

    /// Whether the base-relative point `p` can be reached. Both radii are
    /// inclusive.
    pub fn contains(&self, p: Point) -> bool {
        self.contains_distance(distance(p))
    }

    pub fn contains_distance(&self, dist: f64) -> bool {
        let slack = self.slack();
        dist >= self.inner - slack && dist <= self.outer + slack
    }

    /// Closest reachable point to the base-relative point `p`.
    ///
    /// The center has no direction of its own; it projects along +x, the
    /// same convention the inverse solver uses for `atan2(0, 0)`.
    pub fn nearest(&self, p: Point) -> Point {
        let dist = distance(p);
        if dist > self.outer {
            p.scale(self.outer / dist)
        } else if dist >= self.inner {
            p
        } else if dist == 0.0 {
            Point::new(self.inner, 0.0)
        } else {
            p.scale(self.inner / dist)
        }
    }
}
