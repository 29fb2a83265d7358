use std::error::Error;

use serde::Serialize;

use super::CheckCmd;
use crate::commands::Execute;
use crate::config::LoadedConfig;
use crate::geometry::DriveParams;

/// Result of the check command execution
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_source: Option<String>,
    pub params: DriveParams,
    pub lobes: u32,
    pub ratio_hint: u32,
    pub output_hole_diameter: f64,
    pub warnings: Vec<String>,
}

impl Execute for CheckCmd {
    type Output = CheckResult;

    fn execute(self, config: &LoadedConfig) -> Result<Self::Output, Box<dyn Error>> {
        let resolved = self.drive.resolve(config)?;
        let params = resolved.params.clone();

        Ok(CheckResult {
            config_source: config.source.as_ref().map(|p| p.display().to_string()),
            lobes: params.lobes(),
            ratio_hint: params.ratio_hint(),
            output_hole_diameter: params.output_hole_diameter(),
            warnings: resolved.warning_messages(),
            params,
        })
    }
}
