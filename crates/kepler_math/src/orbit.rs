//! Polar Kepler orbit
//!
//! A satellite moves about a fixed focus on the conic
//!
//! ```text
//! r = p / (1 + e·cos θ),    p = α·(1 − e²)
//! ```
//!
//! where `e` is the eccentricity, `α` the semi-major axis, `p` the
//! semi-latus rectum and `θ` the true anomaly. The anomaly advances by a
//! fixed [`ANGULAR_STEP`] per tick; nothing here is scaled by wall-clock time.

use serde::{Deserialize, Serialize};

use crate::Vec2;

/// Radians added to the true anomaly on every [`KeplerOrbit::step`]
pub const ANGULAR_STEP: f32 = 0.01;

/// Stand-in for a denominator that evaluates to exactly zero
pub const DENOMINATOR_EPSILON: f32 = 1e-6;

/// Replace an exactly-zero denominator with [`DENOMINATOR_EPSILON`].
///
/// Only `0.0` (and `-0.0`) is substituted; values arbitrarily close to zero
/// pass through, so radii near the singular anomaly of a parabolic orbit are
/// still huge rather than clamped.
#[inline]
pub fn nonzero(denominator: f32) -> f32 {
    if denominator == 0.0 {
        DENOMINATOR_EPSILON
    } else {
        denominator
    }
}

/// Shape and scale of a conic orbit
///
/// Values are taken as given: `e >= 1` yields an open trajectory and a
/// non-positive semi-major axis is meaningless, but neither is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitParams {
    /// Eccentricity `e` (0 = circle, 0 < e < 1 = ellipse)
    pub eccentricity: f32,
    /// Semi-major axis `α` in pixels
    pub semi_major_axis: f32,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            eccentricity: 0.0,
            semi_major_axis: 100.0,
        }
    }
}

impl OrbitParams {
    /// Create orbit parameters
    pub const fn new(eccentricity: f32, semi_major_axis: f32) -> Self {
        Self {
            eccentricity,
            semi_major_axis,
        }
    }

    /// Semi-latus rectum `p = α·(1 − e²)`
    #[inline]
    pub fn semi_latus_rectum(&self) -> f32 {
        let e = self.eccentricity;
        self.semi_major_axis * (1.0 - e * e)
    }

    /// True for a circle or an ellipse (`0 <= e < 1`)
    #[inline]
    pub fn is_closed(&self) -> bool {
        (0.0..1.0).contains(&self.eccentricity)
    }
}

/// A single satellite on a Kepler orbit about a fixed focus
///
/// `e`, `p` and the focus are fixed at construction. The anomaly, radius and
/// position are rewritten together by every [`step`](Self::step), so the
/// position always lies at distance `radius` from the focus.
#[derive(Debug, Clone)]
pub struct KeplerOrbit {
    focus: Vec2,
    eccentricity: f32,
    semi_latus_rectum: f32,

    theta: f32,
    radius: f32,
    position: Vec2,
}

impl KeplerOrbit {
    /// Create an orbit with the satellite at true anomaly zero
    pub fn new(params: OrbitParams, focus: Vec2) -> Self {
        Self::with_anomaly(params, focus, 0.0)
    }

    /// Create an orbit with the satellite at true anomaly `theta`
    pub fn with_anomaly(params: OrbitParams, focus: Vec2, theta: f32) -> Self {
        let mut orbit = Self {
            focus,
            eccentricity: params.eccentricity,
            semi_latus_rectum: params.semi_latus_rectum(),
            theta,
            radius: 0.0,
            position: focus,
        };
        orbit.recompute();
        orbit
    }

    /// Advance the satellite by one tick
    pub fn step(&mut self) {
        self.theta += ANGULAR_STEP;
        self.recompute();
    }

    /// Radius of the orbit at an arbitrary true anomaly
    #[inline]
    pub fn radius_at(&self, theta: f32) -> f32 {
        self.semi_latus_rectum / nonzero(1.0 + self.eccentricity * theta.cos())
    }

    fn recompute(&mut self) {
        self.radius = self.radius_at(self.theta);
        self.position = self.focus + Vec2::from_polar(self.radius, self.theta);
    }

    /// Current true anomaly (radians, not wrapped)
    #[inline]
    pub fn theta(&self) -> f32 {
        self.theta
    }

    /// Current distance from the focus
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Current satellite position in pixel space
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// The focus the satellite orbits
    #[inline]
    pub fn focus(&self) -> Vec2 {
        self.focus
    }

    #[inline]
    pub fn eccentricity(&self) -> f32 {
        self.eccentricity
    }

    #[inline]
    pub fn semi_latus_rectum(&self) -> f32 {
        self.semi_latus_rectum
    }
}
