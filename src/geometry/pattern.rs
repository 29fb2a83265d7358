//! Roller ring and output-hole bolt circle placement.

use std::f64::consts::TAU;

use serde::Serialize;

use super::{DriveParams, Point};

/// `count` centres evenly spaced on a circle, starting on +x and going
/// counter-clockwise.
pub fn circular_pattern(radius: f64, count: u32) -> Vec<Point> {
    (0..count)
        .map(|k| {
            let angle = TAU * f64::from(k) / f64::from(count);
            Point::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// A ring of equal circles
#[derive(Debug, Clone, Serialize)]
pub struct CircleRing {
    /// Radius of the circle the centres sit on
    pub pitch_radius: f64,
    /// Radius of each circle
    pub radius: f64,
    pub centres: Vec<Point>,
}

impl CircleRing {
    pub fn new(pitch_radius: f64, count: u32, radius: f64) -> Self {
        CircleRing {
            pitch_radius,
            radius,
            centres: circular_pattern(pitch_radius, count),
        }
    }
}

/// Rollers on the housing and holes in the disc for the output pins.
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub rollers: CircleRing,
    pub output_holes: CircleRing,
}

impl Layout {
    pub fn from_params(params: &DriveParams) -> Self {
        Layout {
            rollers: CircleRing::new(params.pitch_radius, params.rollers, params.roller_radius),
            output_holes: CircleRing::new(
                params.output_pin_circle_radius,
                params.output_pin_count,
                params.output_hole_radius(),
            ),
        }
    }
}
