//! Cycloidal drive geometry.
//!
//! Parameters and their validation live in `params`, the rotor curve in
//! `profile`, and the roller / output-hole placement in `pattern`.

pub mod params;
pub mod pattern;
pub mod profile;

pub use params::{DriveParams, GeometryError, Warning, MAX_COUNT, MAX_SAMPLES, MIN_SAMPLES};
pub use pattern::{circular_pattern, CircleRing, Layout};
pub use profile::{profile_point, sweep, Bounds, Disc, Profile};

use serde::Serialize;

/// A point in the disc plane, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance from the origin
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }
}
