//! Shared test utilities for execute and integration tests.
//!
//! This module provides common helpers used across command execute tests.

use std::io::Write;

use tempfile::NamedTempFile;

use crate::config::{ConfigFile, DriveConfig, LoadedConfig};

/// Create a temporary file containing the given content.
pub fn create_temp_json_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// Configuration with no file behind it: built-in defaults only.
pub fn default_config() -> LoadedConfig {
    LoadedConfig::default()
}

/// Configuration as if loaded from a file with the given drive overrides.
pub fn config_with(drive: DriveConfig) -> LoadedConfig {
    LoadedConfig {
        file: ConfigFile { drive },
        source: None,
    }
}

/// Dual-disc configuration with a reduced sample count, for quicker tests.
pub fn dual_disc_config() -> LoadedConfig {
    config_with(DriveConfig {
        dual_disc: Some(true),
        samples: Some(240),
        ..DriveConfig::default()
    })
}
