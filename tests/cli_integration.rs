//! End-to-end tests driving the CLI surface against a temporary directory.
//!
//! Each test parses real argument vectors, loads a config file from disk and
//! runs the command through the same dispatch path as the binary.

use std::fs;
use std::path::Path;

use clap::Parser;
use cycloid_drive::cli::Args;
use cycloid_drive::commands::CommandRunner;
use cycloid_drive::config::LoadedConfig;
use tempfile::TempDir;

fn write_config(dir: &Path, json: &str) -> std::path::PathBuf {
    let path = dir.join("drive.json");
    fs::write(&path, json).expect("write config");
    path
}

fn run(argv: &[&str], config: &LoadedConfig) -> Result<String, Box<dyn std::error::Error>> {
    let args = Args::try_parse_from(argv)?;
    args.command.run(config, args.format)
}

#[test]
fn export_writes_dual_disc_artifacts_from_config() {
    let tmp = TempDir::new().unwrap();
    let config_path = write_config(
        tmp.path(),
        r#"{ "drive": { "dual_disc": true, "samples": 300 } }"#,
    );
    let config = LoadedConfig::resolve(Some(config_path)).unwrap();
    let out_dir = tmp.path().join("cad");
    let out = out_dir.to_str().unwrap();

    let json = run(&["cycloid", "export", "-o", "json", "--dir", out], &config).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["files"].as_array().unwrap().len(), 5);

    let disc1 = fs::read_to_string(out_dir.join("disc1_points_N10_R20.0_Rr3.0_E1.1.csv")).unwrap();
    assert_eq!(disc1.lines().count(), 301);
    assert_eq!(disc1.lines().next(), Some("x_mm,y_mm"));
    assert!(out_dir.join("disc2_points_N10_R20.0_Rr3.0_E1.1_phase180.0.csv").exists());

    let equations = fs::read_to_string(out_dir.join("solidworks_equations_N10_R20.0_Rr3.0_E1.1.txt")).unwrap();
    assert!(equations.contains("Disc 2"));

    let svg = fs::read_to_string(out_dir.join("preview_N10_R20.0_Rr3.0_E1.1.svg")).unwrap();
    assert!(svg.starts_with("<svg"));
}

#[test]
fn export_refuses_to_overwrite_without_force() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().to_str().unwrap();
    let config = LoadedConfig::default();

    run(&["cycloid", "export", "--dir", out, "--samples", "200"], &config).unwrap();
    let err = run(&["cycloid", "export", "--dir", out, "--samples", "200"], &config).unwrap_err();
    assert!(err.to_string().contains("use --force"));

    run(&["cycloid", "export", "--dir", out, "--samples", "200", "--force"], &config).unwrap();
}

#[test]
fn flags_override_config_file() {
    let tmp = TempDir::new().unwrap();
    let config_path = write_config(tmp.path(), r#"{ "drive": { "rollers": 12 } }"#);
    let config = LoadedConfig::resolve(Some(config_path)).unwrap();

    let json = run(&["cycloid", "check", "-o", "json"], &config).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["params"]["rollers"], 12);

    let json = run(&["cycloid", "check", "-o", "json", "-n", "16"], &config).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["params"]["rollers"], 16);
}

#[test]
fn config_init_round_trips_through_resolve() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("cycloid.json");
    let path_str = path.to_str().unwrap();

    run(
        &["cycloid", "config-init", "--path", path_str, "-n", "14", "-e", "0.9"],
        &LoadedConfig::default(),
    )
    .unwrap();

    let loaded = LoadedConfig::resolve(Some(path)).unwrap();
    let params = loaded.base_params();
    assert_eq!(params.rollers, 14);
    assert_eq!(params.eccentricity, 0.9);
}

#[test]
fn invalid_config_is_reported() {
    let tmp = TempDir::new().unwrap();
    let config_path = write_config(tmp.path(), r#"{ "drive": { "lobes": 9 } }"#);
    let err = LoadedConfig::resolve(Some(config_path)).unwrap_err();
    assert!(err.to_string().contains("Invalid JSON"));
}
