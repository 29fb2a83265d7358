mod cli_tests;
mod execute;
mod execute_tests;
mod output;

use std::error::Error;
use std::path::PathBuf;

use clap::Args;

use crate::commands::{CommandRunner, DriveArgs, Execute};
use crate::config::LoadedConfig;
use crate::output::{OutputFormat, Outputable};

/// Print SolidWorks equation driven curve text
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  cycloid equations                      # Text to paste into SolidWorks
  cycloid equations --out eq.txt         # Also save it to a file
  cycloid equations --dual-disc -o json  # Structured fields incl. disc 2 phase")]
pub struct EquationsCmd {
    /// Also write the equation text to this file
    #[arg(long)]
    pub out: Option<PathBuf>,

    #[command(flatten)]
    pub drive: DriveArgs,
}

impl CommandRunner for EquationsCmd {
    fn run(self, config: &LoadedConfig, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(config)?;
        Ok(result.format(format))
    }
}
