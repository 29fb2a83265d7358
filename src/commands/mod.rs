//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - `execute.rs` producing a serializable result
//! - `output.rs` formatting that result as a table

mod check;
mod config_init;
mod equations;
mod export;
mod layout;
mod params;
mod preview;
mod profile;

pub use check::CheckCmd;
pub use config_init::ConfigInitCmd;
pub use equations::EquationsCmd;
pub use export::ExportCmd;
pub use layout::LayoutCmd;
pub use params::ParamsCmd;
pub use preview::PreviewCmd;
pub use profile::ProfileCmd;

use clap::builder::RangedU64ValueParser;
use clap::{Args, Subcommand};
use enum_dispatch::enum_dispatch;
use std::error::Error;

use crate::config::{DriveConfig, LoadedConfig};
use crate::geometry::{DriveParams, GeometryError, Warning, MAX_COUNT, MAX_SAMPLES, MIN_SAMPLES};
use crate::output::{OutputFormat, Outputable};

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, config: &LoadedConfig) -> Result<Self::Output, Box<dyn Error>>;
}

/// Runs a parsed command and formats its result.
#[enum_dispatch]
pub trait CommandRunner {
    fn run(self, config: &LoadedConfig, format: OutputFormat) -> Result<String, Box<dyn Error>>;
}

#[enum_dispatch(CommandRunner)]
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate drive parameters and report fit warnings
    Check(CheckCmd),

    /// Generate a rotor profile point cloud
    Profile(ProfileCmd),

    /// List roller and output-hole centres
    Layout(LayoutCmd),

    /// Print SolidWorks equation driven curve text
    Equations(EquationsCmd),

    /// Print the parameter sheet
    Params(ParamsCmd),

    /// Write an SVG preview of rotor, rollers and output holes
    Preview(PreviewCmd),

    /// Write every artefact (CSV, equations, parameters, preview) to a directory
    Export(ExportCmd),

    /// Write a config file with the resolved parameters
    ConfigInit(ConfigInitCmd),
}

/// Drive parameter flags shared by every geometry command.
///
/// Unset flags fall back to the config file, then to built-in defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct DriveArgs {
    /// Number of rollers (N)
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(3..=i64::from(MAX_COUNT)))]
    pub rollers: Option<u32>,

    /// Roller pitch circle radius in mm (R)
    #[arg(short = 'R', long)]
    pub pitch_radius: Option<f64>,

    /// Roller radius in mm (Rr)
    #[arg(short = 'r', long)]
    pub roller_radius: Option<f64>,

    /// Eccentricity in mm (E)
    #[arg(short = 'e', long)]
    pub eccentricity: Option<f64>,

    /// Output pin circle radius in mm
    #[arg(long)]
    pub out_pin_circle_radius: Option<f64>,

    /// Output pin count
    #[arg(long, value_parser = clap::value_parser!(u32).range(3..=i64::from(MAX_COUNT)))]
    pub out_pin_count: Option<u32>,

    /// Output pin diameter in mm
    #[arg(long)]
    pub out_pin_diameter: Option<f64>,

    /// Clearance added to the output pin diameter for the holes, in mm
    #[arg(long)]
    pub hole_clearance: Option<f64>,

    /// Generate a second, phase-shifted disc
    #[arg(long, conflicts_with = "single_disc")]
    pub dual_disc: bool,

    /// Force a single disc even if the config enables dual disc
    #[arg(long)]
    pub single_disc: bool,

    /// Phase of disc 2 in degrees (0-360)
    #[arg(long = "disc2-phase")]
    pub disc2_phase: Option<f64>,

    /// Points per profile (200-6000)
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(MIN_SAMPLES as u64..=MAX_SAMPLES as u64))]
    pub samples: Option<usize>,

    /// Radians kept short of 2*pi at the end of the sweep
    #[arg(long)]
    pub eps: Option<f64>,
}

/// Validated parameters plus their soft warnings
#[derive(Debug, Clone)]
pub struct ResolvedDrive {
    pub params: DriveParams,
    pub warnings: Vec<Warning>,
}

impl ResolvedDrive {
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}

impl DriveArgs {
    /// The flags that were given, as a config layer
    pub fn to_config(&self) -> DriveConfig {
        let dual_disc = if self.dual_disc {
            Some(true)
        } else if self.single_disc {
            Some(false)
        } else {
            None
        };

        DriveConfig {
            pitch_radius: self.pitch_radius,
            roller_radius: self.roller_radius,
            eccentricity: self.eccentricity,
            rollers: self.rollers,
            output_pin_circle_radius: self.out_pin_circle_radius,
            output_pin_count: self.out_pin_count,
            output_pin_diameter: self.out_pin_diameter,
            hole_clearance: self.hole_clearance,
            dual_disc,
            disc2_phase_deg: self.disc2_phase,
            samples: self.samples,
            eps: self.eps,
        }
    }

    /// Layer defaults, config and flags, then validate.
    pub fn resolve(&self, config: &LoadedConfig) -> Result<ResolvedDrive, GeometryError> {
        let mut params = config.base_params();
        self.to_config().apply_to(&mut params);

        let warnings = params.validate()?;
        for warning in &warnings {
            tracing::warn!("{}", warning);
        }
        tracing::debug!(?params, "resolved drive parameters");

        Ok(ResolvedDrive { params, warnings })
    }
}
