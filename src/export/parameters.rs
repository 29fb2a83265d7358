//! Human-readable parameter sheet.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::format_float;
use crate::geometry::DriveParams;

#[derive(Debug, Clone, Serialize)]
pub struct ParameterSheet {
    pub generated_at: String,
    pub lobes: u32,
    pub ratio_hint: u32,
    pub params: DriveParams,
}

impl ParameterSheet {
    pub fn new(params: &DriveParams, generated_at: NaiveDateTime) -> Self {
        ParameterSheet {
            generated_at: generated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            lobes: params.lobes(),
            ratio_hint: params.ratio_hint(),
            params: params.clone(),
        }
    }

    /// Sheet stamped with the local time
    pub fn now(params: &DriveParams) -> Self {
        Self::new(params, chrono::Local::now().naive_local())
    }

    pub fn to_text(&self) -> String {
        let p = &self.params;
        let mut lines = vec![
            format!("Generated: {}", self.generated_at),
            String::new(),
            "Core rotor parameters (mm unless stated):".to_string(),
            format!("N (rollers)            = {}", p.rollers),
            format!("Lobes (N-1)             = {}", self.lobes),
            format!("R  (roller PCD radius)  = {}", format_float(p.pitch_radius)),
            format!("Rr (roller radius)      = {}", format_float(p.roller_radius)),
            format!("E  (eccentricity)       = {}", format_float(p.eccentricity)),
            format!("Ratio hint (~N-1)        = {}", self.ratio_hint),
            String::new(),
            "Output holes:".to_string(),
            format!(
                "Output pin circle radius = {}",
                format_float(p.output_pin_circle_radius)
            ),
            format!("Output pin count         = {}", p.output_pin_count),
            format!("Output pin diameter      = {}", format_float(p.output_pin_diameter)),
            format!("Hole clearance           = {}", format_float(p.hole_clearance)),
            String::new(),
            "Sampling:".to_string(),
            format!("samples                  = {}", p.samples),
            format!("eps (rad)                = {}", format_float(p.eps)),
        ];

        if p.dual_disc {
            lines.push(String::new());
            lines.push("Dual disc:".to_string());
            lines.push(format!(
                "disc2 phase (deg)        = {}",
                format_float(p.disc2_phase_deg)
            ));
        }

        lines.join("\n")
    }
}
