use std::error::Error;

use serde::Serialize;

use super::ExportCmd;
use crate::commands::Execute;
use crate::config::LoadedConfig;
use crate::export::{
    points_csv, render_preview, write_artifact, ArtifactNames, ExportError, ParameterSheet,
    SolidWorksEquations,
};
use crate::geometry::{Disc, DriveParams, Profile};

/// Kind of file written by an export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Disc1Points,
    Disc2Points,
    Equations,
    Parameters,
    Preview,
}

impl ArtifactKind {
    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::Disc1Points => "disc 1 points",
            ArtifactKind::Disc2Points => "disc 2 points",
            ArtifactKind::Equations => "equations",
            ArtifactKind::Parameters => "parameters",
            ArtifactKind::Preview => "preview",
        }
    }
}

/// A file written by the export
#[derive(Debug, Clone, Serialize)]
pub struct ExportedFile {
    pub kind: ArtifactKind,
    pub path: String,
    pub bytes: usize,
}

/// Result of the export command execution
#[derive(Debug, Clone, Serialize)]
pub struct ExportResult {
    pub dir: String,
    pub files: Vec<ExportedFile>,
    pub warnings: Vec<String>,
}

/// Name and contents of every artefact for `params`, in write order.
fn build_artifacts(params: &DriveParams, with_preview: bool) -> Vec<(ArtifactKind, String, String)> {
    let names = ArtifactNames::new(params);

    let disc1 = Profile::generate(params, Disc::First);
    let mut artifacts = vec![(ArtifactKind::Disc1Points, names.disc1_csv, points_csv(&disc1.points))];

    if params.dual_disc {
        let disc2 = Profile::generate(params, Disc::Second);
        artifacts.push((ArtifactKind::Disc2Points, names.disc2_csv, points_csv(&disc2.points)));
    }

    artifacts.push((
        ArtifactKind::Equations,
        names.equations,
        SolidWorksEquations::new(params).to_text(),
    ));
    artifacts.push((
        ArtifactKind::Parameters,
        names.parameters,
        ParameterSheet::now(params).to_text(),
    ));

    if with_preview {
        artifacts.push((ArtifactKind::Preview, names.preview, render_preview(params)));
    }

    artifacts
}

impl Execute for ExportCmd {
    type Output = ExportResult;

    fn execute(self, config: &LoadedConfig) -> Result<Self::Output, Box<dyn Error>> {
        let resolved = self.drive.resolve(config)?;
        let artifacts = build_artifacts(&resolved.params, !self.no_preview);

        // Check everything up front so a refused export writes nothing
        if !self.force {
            if let Some((_, name, _)) = artifacts.iter().find(|(_, name, _)| self.dir.join(name).exists()) {
                return Err(ExportError::Exists(self.dir.join(name)).into());
            }
        }

        let mut files = Vec::with_capacity(artifacts.len());
        for (kind, name, contents) in artifacts {
            let path = self.dir.join(&name);
            write_artifact(&path, &contents)?;
            files.push(ExportedFile {
                kind,
                path: path.display().to_string(),
                bytes: contents.len(),
            });
        }
        tracing::info!(dir = %self.dir.display(), files = files.len(), "export complete");

        Ok(ExportResult {
            dir: self.dir.display().to_string(),
            files,
            warnings: resolved.warning_messages(),
        })
    }
}
