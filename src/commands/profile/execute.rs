use std::error::Error;

use serde::Serialize;

use super::ProfileCmd;
use crate::commands::Execute;
use crate::config::LoadedConfig;
use crate::export::{points_csv, write_artifact, ExportError};
use crate::geometry::{Bounds, Disc, Point, Profile};

/// Result of the profile command execution
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResult {
    pub disc: u8,
    pub phase_deg: f64,
    pub samples: usize,
    pub min_radius: f64,
    pub max_radius: f64,
    pub bounds: Bounds,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csv_path: Option<String>,
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub points: Vec<Point>,
}

impl Execute for ProfileCmd {
    type Output = ProfileResult;

    fn execute(self, config: &LoadedConfig) -> Result<Self::Output, Box<dyn Error>> {
        let resolved = self.drive.resolve(config)?;
        let params = &resolved.params;

        let disc = if self.disc == 2 { Disc::Second } else { Disc::First };
        if disc == Disc::Second && !params.dual_disc {
            return Err(ExportError::SecondDiscDisabled.into());
        }

        let profile = Profile::generate(params, disc);
        tracing::debug!(disc = disc.number(), points = profile.len(), "generated profile");

        let bounds = profile.bounds().ok_or("profile has no points")?;
        let (min_radius, max_radius) = profile.radius_range().ok_or("profile has no points")?;

        if let Some(path) = &self.csv {
            write_artifact(path, &points_csv(&profile.points))?;
        }

        Ok(ProfileResult {
            disc: disc.number(),
            phase_deg: profile.phase_rad.to_degrees(),
            samples: profile.len(),
            min_radius,
            max_radius,
            bounds,
            csv_path: self.csv.map(|p| p.display().to_string()),
            warnings: resolved.warning_messages(),
            points: if self.points { profile.points } else { Vec::new() },
        })
    }
}
