use std::error::Error;

use serde::Serialize;

use super::EquationsCmd;
use crate::commands::Execute;
use crate::config::LoadedConfig;
use crate::export::{write_artifact, SolidWorksEquations};

/// Result of the equations command execution
#[derive(Debug, Clone, Serialize)]
pub struct EquationsResult {
    #[serde(flatten)]
    pub equations: SolidWorksEquations,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub written_to: Option<String>,
    pub warnings: Vec<String>,
}

impl Execute for EquationsCmd {
    type Output = EquationsResult;

    fn execute(self, config: &LoadedConfig) -> Result<Self::Output, Box<dyn Error>> {
        let resolved = self.drive.resolve(config)?;
        let equations = SolidWorksEquations::new(&resolved.params);

        if let Some(path) = &self.out {
            write_artifact(path, &equations.to_text())?;
        }

        Ok(EquationsResult {
            equations,
            written_to: self.out.map(|p| p.display().to_string()),
            warnings: resolved.warning_messages(),
        })
    }
}
