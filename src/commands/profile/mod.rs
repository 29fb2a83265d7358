mod cli_tests;
mod execute;
mod output;

use std::error::Error;
use std::path::PathBuf;

use clap::Args;

use crate::commands::{CommandRunner, DriveArgs, Execute};
use crate::config::LoadedConfig;
use crate::output::{OutputFormat, Outputable};

/// Generate a rotor profile point cloud
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  cycloid profile                              # Summary of the disc 1 profile
  cycloid profile --csv disc1.csv              # Write points for CAD import
  cycloid profile --dual-disc --disc 2 --points  # List disc 2 points")]
pub struct ProfileCmd {
    /// Which disc to generate (2 requires --dual-disc)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub disc: u8,

    /// Write the points as CSV to this file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Include every point in the output
    #[arg(long, default_value_t = false)]
    pub points: bool,

    #[command(flatten)]
    pub drive: DriveArgs,
}

impl CommandRunner for ProfileCmd {
    fn run(self, config: &LoadedConfig, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(config)?;
        Ok(result.format(format))
    }
}
