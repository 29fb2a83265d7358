mod execute;
mod execute_tests;
mod output;
mod output_tests;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, DriveArgs, Execute};
use crate::config::LoadedConfig;
use crate::output::{OutputFormat, Outputable};

/// List roller and output-hole centres
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  cycloid layout                         # Rollers and output holes for the defaults
  cycloid layout --out-pin-count 6       # Six output pins
  cycloid layout -o json                 # Centres as JSON")]
pub struct LayoutCmd {
    #[command(flatten)]
    pub drive: DriveArgs,
}

impl CommandRunner for LayoutCmd {
    fn run(self, config: &LoadedConfig, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(config)?;
        Ok(result.format(format))
    }
}
