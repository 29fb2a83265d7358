//! Text artefacts handed to the CAD tool: equation text, parameter sheet,
//! CSV point clouds and an SVG preview.

pub mod csv;
pub mod equations;
pub mod naming;
pub mod parameters;
pub mod svg;

pub use csv::points_csv;
pub use equations::SolidWorksEquations;
pub use naming::ArtifactNames;
pub use parameters::ParameterSheet;
pub use svg::render_preview;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Refusing to overwrite existing file '{0}' (use --force)")]
    Exists(PathBuf),

    #[error("Disc 2 requested but dual disc is disabled (pass --dual-disc)")]
    SecondDiscDisabled,
}

/// Format a float the way the exported text expects: shortest round-trip
/// representation, always with a decimal point for whole numbers.
///
/// Very small and very large values use a signed, two-digit exponent:
/// `1e-06`, `1e+16`.
pub fn format_float(value: f64) -> String {
    let s = format!("{:?}", value);
    match s.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => s,
    }
}

/// Write `contents` to `path`, creating parent directories as needed.
pub fn write_artifact(path: &Path, contents: &str) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ExportError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, contents).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote artefact");
    Ok(())
}
