//! Configuration file handling for default drive parameters.
//!
//! A config file holds a partial set of drive parameters in JSON. Values
//! given on the command line win over the file, and the file wins over the
//! built-in defaults.
//!
//! ```json
//! {
//!   "drive": {
//!     "rollers": 12,
//!     "pitch_radius": 30.0,
//!     "eccentricity": 1.5
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::geometry::DriveParams;

/// Project-local config, checked first
pub const PROJECT_CONFIG: &str = ".cycloid/config.json";
/// Config next to the working directory
pub const LOCAL_CONFIG: &str = "cycloid.json";
/// User-global config, relative to the home directory
pub const USER_CONFIG: &str = ".cycloid/config.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Top-level configuration file structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub drive: DriveConfig,
}

/// Partial drive parameters. Unset fields fall through to the next layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DriveConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitch_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roller_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eccentricity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rollers: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_pin_circle_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_pin_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_pin_diameter: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hole_clearance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dual_disc: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disc2_phase_deg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub samples: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eps: Option<f64>,
}

impl DriveConfig {
    /// Every field set, taken from `params`.
    pub fn from_params(params: &DriveParams) -> Self {
        DriveConfig {
            pitch_radius: Some(params.pitch_radius),
            roller_radius: Some(params.roller_radius),
            eccentricity: Some(params.eccentricity),
            rollers: Some(params.rollers),
            output_pin_circle_radius: Some(params.output_pin_circle_radius),
            output_pin_count: Some(params.output_pin_count),
            output_pin_diameter: Some(params.output_pin_diameter),
            hole_clearance: Some(params.hole_clearance),
            dual_disc: Some(params.dual_disc),
            disc2_phase_deg: Some(params.disc2_phase_deg),
            samples: Some(params.samples),
            eps: Some(params.eps),
        }
    }

    /// Overwrite the fields of `params` that are set here.
    pub fn apply_to(&self, params: &mut DriveParams) {
        fn set<T: Copy>(target: &mut T, value: Option<T>) {
            if let Some(v) = value {
                *target = v;
            }
        }

        set(&mut params.pitch_radius, self.pitch_radius);
        set(&mut params.roller_radius, self.roller_radius);
        set(&mut params.eccentricity, self.eccentricity);
        set(&mut params.rollers, self.rollers);
        set(&mut params.output_pin_circle_radius, self.output_pin_circle_radius);
        set(&mut params.output_pin_count, self.output_pin_count);
        set(&mut params.output_pin_diameter, self.output_pin_diameter);
        set(&mut params.hole_clearance, self.hole_clearance);
        set(&mut params.dual_disc, self.dual_disc);
        set(&mut params.disc2_phase_deg, self.disc2_phase_deg);
        set(&mut params.samples, self.samples);
        set(&mut params.eps, self.eps);
    }
}

impl ConfigFile {
    /// Load and parse a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file doesn't exist
    /// - The file cannot be read
    /// - The JSON is invalid or contains unknown drive fields
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// The configuration a command runs against, and where it came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub file: ConfigFile,
    pub source: Option<PathBuf>,
}

impl LoadedConfig {
    /// Resolve and load the configuration.
    ///
    /// An explicit path must exist. Without one, the standard locations are
    /// searched and built-in defaults are used if none exists.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => Some(path),
            None => find_config_path(Path::new("."), home::home_dir().as_deref()),
        };

        match path {
            Some(path) => {
                let file = ConfigFile::load(&path)?;
                tracing::info!(path = %path.display(), "loaded configuration");
                Ok(LoadedConfig {
                    file,
                    source: Some(path),
                })
            }
            None => {
                tracing::debug!("no configuration file found, using defaults");
                Ok(LoadedConfig::default())
            }
        }
    }

    /// Parameters from defaults overlaid with this configuration
    pub fn base_params(&self) -> DriveParams {
        let mut params = DriveParams::default();
        self.file.drive.apply_to(&mut params);
        params
    }
}

/// Find a config file by checking multiple locations in order of preference:
///   1. `.cycloid/config.json` (project-local)
///   2. `./cycloid.json` (current directory)
///   3. `~/.cycloid/config.json` (user-global)
pub fn find_config_path(base_dir: &Path, home_dir: Option<&Path>) -> Option<PathBuf> {
    let project = base_dir.join(PROJECT_CONFIG);
    if project.exists() {
        return Some(project);
    }

    let local = base_dir.join(LOCAL_CONFIG);
    if local.exists() {
        return Some(local);
    }

    home_dir
        .map(|home| home.join(USER_CONFIG))
        .filter(|global| global.exists())
}
