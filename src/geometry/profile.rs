//! Rotor (cycloidal disc) profile generation.
//!
//! Points follow the parametric curve commonly pasted into SolidWorks'
//! equation driven curve dialog:
//!
//! ```text
//! X = (R*cos(t)) - (Rr*cos(t+psi)) - (E*cos(N*t))
//! Y = (-R*sin(t)) + (Rr*sin(t+psi)) + (E*sin(N*t))
//! psi = atan( sin((1-N)*t) / ((R/(E*N)) - cos((1-N)*t)) )
//! ```
//!
//! Here `psi` is computed with `atan2` so the branch never flips.

use serde::{Deserialize, Serialize};

use super::{DriveParams, Point};

/// Which disc of the drive to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disc {
    #[default]
    First,
    /// Phase shifted by `disc2_phase_deg`
    Second,
}

impl Disc {
    pub fn number(&self) -> u8 {
        match self {
            Disc::First => 1,
            Disc::Second => 2,
        }
    }

    /// Phase offset applied to the sweep parameter, in radians
    pub fn phase_rad(&self, params: &DriveParams) -> f64 {
        match self {
            Disc::First => 0.0,
            Disc::Second => params.disc2_phase_rad(),
        }
    }
}

/// `samples` values from 0 to `2*pi - eps`, both ends included.
pub fn sweep(samples: usize, eps: f64) -> Vec<f64> {
    let end = std::f64::consts::TAU - eps;
    match samples {
        0 => Vec::new(),
        1 => vec![0.0],
        n => {
            let step = end / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { i as f64 * step })
                .collect()
        }
    }
}

/// One point of the rotor profile at sweep parameter `t`.
pub fn profile_point(t: f64, params: &DriveParams, phase_rad: f64) -> Point {
    let r = params.pitch_radius;
    let rr = params.roller_radius;
    let e = params.eccentricity;
    let n = f64::from(params.rollers);

    let tt = t + phase_rad;
    let a = (1.0 - n) * tt;
    let denom = (r / (e * n)) - a.cos();
    let psi = a.sin().atan2(denom);

    let x = (r * tt.cos()) - (rr * (tt + psi).cos()) - (e * (n * tt).cos());
    let y = (-r * tt.sin()) + (rr * (tt + psi).sin()) + (e * (n * tt).sin());
    Point::new(x, y)
}

/// Axis-aligned bounding box of a profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// A sampled rotor profile, centred at the origin.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub disc: Disc,
    pub phase_rad: f64,
    pub points: Vec<Point>,
}

impl Profile {
    /// Sample the profile of `disc` over the full sweep.
    ///
    /// Parameters are assumed to be validated.
    pub fn generate(params: &DriveParams, disc: Disc) -> Self {
        let phase_rad = disc.phase_rad(params);
        let points = sweep(params.samples, params.eps)
            .into_iter()
            .map(|t| profile_point(t, params, phase_rad))
            .collect();

        Profile {
            disc,
            phase_rad,
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        let first = self.points.first()?;
        let init = Bounds {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        Some(self.points.iter().fold(init, |b, p| Bounds {
            min_x: b.min_x.min(p.x),
            max_x: b.max_x.max(p.x),
            min_y: b.min_y.min(p.y),
            max_y: b.max_y.max(p.y),
        }))
    }

    /// Smallest and largest distance of any profile point from the disc centre
    pub fn radius_range(&self) -> Option<(f64, f64)> {
        let mut radii = self.points.iter().map(Point::norm);
        let first = radii.next()?;
        Some(radii.fold((first, first), |(lo, hi), r| (lo.min(r), hi.max(r))))
    }
}
