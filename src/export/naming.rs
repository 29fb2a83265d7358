//! File names for exported artefacts, keyed by the core rotor parameters.

use serde::Serialize;

use super::format_float;
use crate::geometry::DriveParams;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactNames {
    pub disc1_csv: String,
    pub disc2_csv: String,
    pub equations: String,
    pub parameters: String,
    pub preview: String,
}

impl ArtifactNames {
    pub fn new(params: &DriveParams) -> Self {
        let key = format!(
            "N{}_R{}_Rr{}_E{}",
            params.rollers,
            format_float(params.pitch_radius),
            format_float(params.roller_radius),
            format_float(params.eccentricity)
        );

        ArtifactNames {
            disc1_csv: format!("disc1_points_{key}.csv"),
            disc2_csv: format!(
                "disc2_points_{key}_phase{}.csv",
                format_float(params.disc2_phase_deg)
            ),
            equations: format!("solidworks_equations_{key}.txt"),
            parameters: format!("parameters_{key}.txt"),
            preview: format!("preview_{key}.svg"),
        }
    }
}
