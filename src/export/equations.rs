//! SolidWorks "Equation Driven Curve" text.
//!
//! SolidWorks understands `atan`, `sin` and `cos`, so `psi` is written as the
//! classic `atan` of a fraction rather than `atan2`.

use serde::Serialize;

use super::format_float;
use crate::geometry::DriveParams;

/// Structured form of the equation export
#[derive(Debug, Clone, Serialize)]
pub struct SolidWorksEquations {
    pub pitch_radius: f64,
    pub roller_radius: f64,
    pub eccentricity: f64,
    pub rollers: u32,
    pub psi: String,
    pub x_equation: String,
    pub y_equation: String,
    pub t_start: f64,
    pub t_end: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disc2_phase_rad: Option<f64>,
}

impl SolidWorksEquations {
    pub fn new(params: &DriveParams) -> Self {
        let n = params.rollers;
        let psi = format!("atan( sin((1-{n})*t) / ((R/(E*{n})) - cos((1-{n})*t)) )");
        let x_equation = format!("X = (R*cos(t)) - (Rr*cos(t + {psi})) - (E*cos({n}*t))");
        let y_equation = format!("Y = (-R*sin(t)) + (Rr*sin(t + {psi})) + (E*sin({n}*t))");

        SolidWorksEquations {
            pitch_radius: params.pitch_radius,
            roller_radius: params.roller_radius,
            eccentricity: params.eccentricity,
            rollers: n,
            psi,
            x_equation,
            y_equation,
            t_start: 0.0,
            t_end: params.sweep_end(),
            disc2_phase_rad: params.dual_disc.then(|| params.disc2_phase_rad()),
        }
    }

    /// Copy/paste text for the equation dialog
    pub fn to_text(&self) -> String {
        let mut lines = vec![
            "SolidWorks Equation Driven Curve (Parametric)".to_string(),
            "Units: mm for R, Rr, E. Parameter t is radians.".to_string(),
            String::new(),
            "Define these variables in SolidWorks Equations:".to_string(),
            format!("R  = {}", format_float(self.pitch_radius)),
            format!("Rr = {}", format_float(self.roller_radius)),
            format!("E  = {}", format_float(self.eccentricity)),
            format!("N  = {}", self.rollers),
            String::new(),
            "Paste into the Equation Driven Curve dialog:".to_string(),
            self.x_equation.clone(),
            self.y_equation.clone(),
            String::new(),
            format!(
                "Recommended t range: {} to {} (avoid exactly 2*pi)",
                format_float(self.t_start),
                format_float(self.t_end)
            ),
        ];

        if let Some(phase) = self.disc2_phase_rad {
            let phase = format_float(phase);
            lines.push(String::new());
            lines.push("Optional: Disc 2 (phase shifted)".to_string());
            lines.push(format!(
                "Use t2 = t + {phase}  (or add {phase} everywhere t appears)"
            ));
        }

        lines.join("\n")
    }
}
