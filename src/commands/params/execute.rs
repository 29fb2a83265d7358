use std::error::Error;

use serde::Serialize;

use super::ParamsCmd;
use crate::commands::Execute;
use crate::config::LoadedConfig;
use crate::export::{write_artifact, ParameterSheet};

/// Result of the params command execution
#[derive(Debug, Clone, Serialize)]
pub struct ParamsResult {
    #[serde(flatten)]
    pub sheet: ParameterSheet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub written_to: Option<String>,
    pub warnings: Vec<String>,
}

impl Execute for ParamsCmd {
    type Output = ParamsResult;

    fn execute(self, config: &LoadedConfig) -> Result<Self::Output, Box<dyn Error>> {
        let resolved = self.drive.resolve(config)?;
        let sheet = ParameterSheet::now(&resolved.params);

        if let Some(path) = &self.out {
            write_artifact(path, &sheet.to_text())?;
        }

        Ok(ParamsResult {
            sheet,
            written_to: self.out.map(|p| p.display().to_string()),
            warnings: resolved.warning_messages(),
        })
    }
}
