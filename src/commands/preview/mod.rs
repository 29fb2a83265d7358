mod execute;
mod execute_tests;
mod output;

use std::error::Error;
use std::path::PathBuf;

use clap::Args;

use crate::commands::{CommandRunner, DriveArgs, Execute};
use crate::config::LoadedConfig;
use crate::output::{OutputFormat, Outputable};

/// Write an SVG preview of rotor, rollers and output holes
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  cycloid preview                        # preview_N10_R20.0_Rr3.0_E1.1.svg
  cycloid preview --dual-disc            # Overlay the phase-shifted disc
  cycloid preview --out fit.svg -e 1.6   # Check a larger eccentricity")]
pub struct PreviewCmd {
    /// Output SVG file (default: named after the core parameters)
    #[arg(long)]
    pub out: Option<PathBuf>,

    #[command(flatten)]
    pub drive: DriveArgs,
}

impl CommandRunner for PreviewCmd {
    fn run(self, config: &LoadedConfig, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(config)?;
        Ok(result.format(format))
    }
}
