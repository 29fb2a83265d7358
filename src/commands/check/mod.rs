mod cli_tests;
mod execute;
mod output;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, DriveArgs, Execute};
use crate::config::LoadedConfig;
use crate::output::{OutputFormat, Outputable};

/// Validate drive parameters and report fit warnings
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  cycloid check                          # Check the configured defaults
  cycloid check -n 12 -R 30 -e 1.5       # Check a 12-roller variant
  cycloid check -e 3 -o json             # Warnings as JSON")]
pub struct CheckCmd {
    #[command(flatten)]
    pub drive: DriveArgs,
}

impl CommandRunner for CheckCmd {
    fn run(self, config: &LoadedConfig, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(config)?;
        Ok(result.format(format))
    }
}
