mod execute;
mod output;
mod output_tests;

use std::error::Error;
use std::path::PathBuf;

use clap::Args;

use crate::commands::{CommandRunner, DriveArgs, Execute};
use crate::config::LoadedConfig;
use crate::output::{OutputFormat, Outputable};

/// Write a config file with the resolved parameters
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  cycloid config-init                        # ./cycloid.json with the defaults
  cycloid config-init -n 12 -R 30 -e 1.5     # Pin a variant for later commands
  cycloid config-init --path .cycloid/config.json --force")]
pub struct ConfigInitCmd {
    /// Where to write the config file
    #[arg(long, default_value = "cycloid.json")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(short, long, default_value_t = false)]
    pub force: bool,

    #[command(flatten)]
    pub drive: DriveArgs,
}

impl CommandRunner for ConfigInitCmd {
    fn run(self, config: &LoadedConfig, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(config)?;
        Ok(result.format(format))
    }
}
