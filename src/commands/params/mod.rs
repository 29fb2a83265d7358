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

/// Print the parameter sheet
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  cycloid params                         # Parameter sheet for the defaults
  cycloid params -n 12 --out params.txt  # Save the sheet next to the CAD files")]
pub struct ParamsCmd {
    /// Also write the sheet to this file
    #[arg(long)]
    pub out: Option<PathBuf>,

    #[command(flatten)]
    pub drive: DriveArgs,
}

impl CommandRunner for ParamsCmd {
    fn run(self, config: &LoadedConfig, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(config)?;
        Ok(result.format(format))
    }
}
