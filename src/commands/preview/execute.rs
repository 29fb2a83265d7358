use std::error::Error;
use std::path::PathBuf;

use serde::Serialize;

use super::PreviewCmd;
use crate::commands::Execute;
use crate::config::LoadedConfig;
use crate::export::{render_preview, write_artifact, ArtifactNames};

/// Result of the preview command execution
#[derive(Debug, Clone, Serialize)]
pub struct PreviewResult {
    pub path: String,
    pub bytes: usize,
    pub dual_disc: bool,
    pub warnings: Vec<String>,
}

impl Execute for PreviewCmd {
    type Output = PreviewResult;

    fn execute(self, config: &LoadedConfig) -> Result<Self::Output, Box<dyn Error>> {
        let resolved = self.drive.resolve(config)?;
        let params = &resolved.params;

        let path = self
            .out
            .unwrap_or_else(|| PathBuf::from(ArtifactNames::new(params).preview));
        let svg = render_preview(params);
        write_artifact(&path, &svg)?;

        Ok(PreviewResult {
            path: path.display().to_string(),
            bytes: svg.len(),
            dual_disc: params.dual_disc,
            warnings: resolved.warning_messages(),
        })
    }
}
