use std::error::Error;

use serde::Serialize;

use super::LayoutCmd;
use crate::commands::Execute;
use crate::config::LoadedConfig;
use crate::geometry::{CircleRing, Layout};

/// Result of the layout command execution
#[derive(Debug, Clone, Serialize)]
pub struct LayoutResult {
    pub rollers: CircleRing,
    pub output_holes: CircleRing,
    pub warnings: Vec<String>,
}

impl Execute for LayoutCmd {
    type Output = LayoutResult;

    fn execute(self, config: &LoadedConfig) -> Result<Self::Output, Box<dyn Error>> {
        let resolved = self.drive.resolve(config)?;
        let layout = Layout::from_params(&resolved.params);

        Ok(LayoutResult {
            rollers: layout.rollers,
            output_holes: layout.output_holes,
            warnings: resolved.warning_messages(),
        })
    }
}
