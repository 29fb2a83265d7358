//! Drive parameters and sanity checks.

use std::f64::consts::TAU;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fewest points a profile may be sampled with
pub const MIN_SAMPLES: usize = 200;
/// Most points a profile may be sampled with
pub const MAX_SAMPLES: usize = 6000;
/// Upper bound for roller and output pin counts
pub const MAX_COUNT: u32 = 500;

/// Hard validation failures. Geometry cannot be generated from these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must be > 0, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must be >= {min}, got {value}")]
    CountTooSmall {
        field: &'static str,
        min: u32,
        value: u32,
    },

    #[error("{field} must be <= {max}, got {value}")]
    CountTooLarge {
        field: &'static str,
        max: u32,
        value: u32,
    },

    #[error("hole_clearance must be >= 0, got {0}")]
    NegativeClearance(f64),

    #[error("disc2_phase_deg must be within 0..=360, got {0}")]
    PhaseOutOfRange(f64),

    #[error("samples must be within 200..=6000, got {0}")]
    SamplesOutOfRange(usize),

    #[error("eps must be within (0, 2*pi), got {0}")]
    EpsOutOfRange(f64),
}

/// Soft findings. The geometry is still generated, but the fit should be checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Warning {
    EccentricityTooLarge,
    RollerNotInsidePitch,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::EccentricityTooLarge => f.write_str(
                "E is larger than R/N. This often causes ugly/self-intersecting profiles. \
                 Not always invalid, but check fit.",
            ),
            Warning::RollerNotInsidePitch => f.write_str(
                "R should usually be larger than Rr (roller circle radius vs roller radius).",
            ),
        }
    }
}

/// Everything needed to generate one drive variant. Lengths are in millimetres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriveParams {
    /// Roller pitch circle radius (R)
    pub pitch_radius: f64,
    /// Roller radius (Rr)
    pub roller_radius: f64,
    /// Eccentricity (E)
    pub eccentricity: f64,
    /// Number of rollers (N)
    pub rollers: u32,

    pub output_pin_circle_radius: f64,
    pub output_pin_count: u32,
    pub output_pin_diameter: f64,
    /// Added to the pin diameter
    pub hole_clearance: f64,

    pub dual_disc: bool,
    pub disc2_phase_deg: f64,

    pub samples: usize,
    /// Radians trimmed off the end of the 0..2*pi sweep
    pub eps: f64,
}

impl Default for DriveParams {
    fn default() -> Self {
        Self {
            pitch_radius: 20.0,
            roller_radius: 3.0,
            eccentricity: 1.1,
            rollers: 10,
            output_pin_circle_radius: 10.0,
            output_pin_count: 4,
            output_pin_diameter: 8.0,
            hole_clearance: 0.2,
            dual_disc: false,
            disc2_phase_deg: 180.0,
            samples: 1200,
            eps: 9e-4,
        }
    }
}

impl DriveParams {
    /// Check the parameters.
    ///
    /// Returns the soft warnings on success, in a stable order. Any hard
    /// error short-circuits.
    pub fn validate(&self) -> Result<Vec<Warning>, GeometryError> {
        let lengths = [
            ("pitch_radius", self.pitch_radius),
            ("roller_radius", self.roller_radius),
            ("eccentricity", self.eccentricity),
            ("output_pin_circle_radius", self.output_pin_circle_radius),
            ("output_pin_diameter", self.output_pin_diameter),
        ];
        let others = [
            ("hole_clearance", self.hole_clearance),
            ("disc2_phase_deg", self.disc2_phase_deg),
            ("eps", self.eps),
        ];

        for &(field, value) in lengths.iter().chain(others.iter()) {
            if !value.is_finite() {
                return Err(GeometryError::NotFinite { field, value });
            }
        }

        for (field, value) in lengths {
            if value <= 0.0 {
                return Err(GeometryError::NotPositive { field, value });
            }
        }

        for (field, value) in [
            ("rollers", self.rollers),
            ("output_pin_count", self.output_pin_count),
        ] {
            if value < 3 {
                return Err(GeometryError::CountTooSmall { field, min: 3, value });
            }
            if value > MAX_COUNT {
                return Err(GeometryError::CountTooLarge {
                    field,
                    max: MAX_COUNT,
                    value,
                });
            }
        }
        if self.hole_clearance < 0.0 {
            return Err(GeometryError::NegativeClearance(self.hole_clearance));
        }
        if !(0.0..=360.0).contains(&self.disc2_phase_deg) {
            return Err(GeometryError::PhaseOutOfRange(self.disc2_phase_deg));
        }
        if !(MIN_SAMPLES..=MAX_SAMPLES).contains(&self.samples) {
            return Err(GeometryError::SamplesOutOfRange(self.samples));
        }
        if self.eps <= 0.0 || self.eps >= TAU {
            return Err(GeometryError::EpsOutOfRange(self.eps));
        }

        let mut warnings = Vec::new();
        if self.eccentricity > self.pitch_radius / f64::from(self.rollers) {
            warnings.push(Warning::EccentricityTooLarge);
        }
        if self.pitch_radius <= self.roller_radius {
            warnings.push(Warning::RollerNotInsidePitch);
        }
        Ok(warnings)
    }

    /// Number of cycloidal lobes on the disc (N - 1)
    pub fn lobes(&self) -> u32 {
        self.rollers.saturating_sub(1)
    }

    /// Indicative single-disc reduction ratio, (N-1):1. Display only; the
    /// real ratio depends on which member is held.
    pub fn ratio_hint(&self) -> u32 {
        self.lobes()
    }

    pub fn output_hole_diameter(&self) -> f64 {
        self.output_pin_diameter + self.hole_clearance
    }

    pub fn output_hole_radius(&self) -> f64 {
        self.output_hole_diameter() / 2.0
    }

    pub fn disc2_phase_rad(&self) -> f64 {
        self.disc2_phase_deg.to_radians()
    }

    /// Last value of the sweep parameter, 2*pi - eps
    pub fn sweep_end(&self) -> f64 {
        TAU - self.eps
    }
}
