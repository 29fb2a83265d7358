use std::error::Error;

use serde::Serialize;

use super::ConfigInitCmd;
use crate::commands::Execute;
use crate::config::{ConfigFile, DriveConfig, LoadedConfig};
use crate::export::{write_artifact, ExportError};
use crate::geometry::DriveParams;

/// Result of the config-init command execution
#[derive(Debug, Clone, Serialize)]
pub struct ConfigInitResult {
    pub path: String,
    pub params: DriveParams,
    pub warnings: Vec<String>,
}

impl Execute for ConfigInitCmd {
    type Output = ConfigInitResult;

    fn execute(self, config: &LoadedConfig) -> Result<Self::Output, Box<dyn Error>> {
        let resolved = self.drive.resolve(config)?;

        if self.path.exists() && !self.force {
            return Err(ExportError::Exists(self.path).into());
        }

        let file = ConfigFile {
            drive: DriveConfig::from_params(&resolved.params),
        };
        write_artifact(&self.path, &file.to_json())?;

        Ok(ConfigInitResult {
            path: self.path.display().to_string(),
            warnings: resolved.warning_messages(),
            params: resolved.params,
        })
    }
}
