mod execute;
mod output;

use std::error::Error;
use std::path::PathBuf;

use clap::Args;

use crate::commands::{CommandRunner, DriveArgs, Execute};
use crate::config::LoadedConfig;
use crate::output::{OutputFormat, Outputable};

/// Write every artefact (CSV, equations, parameters, preview) to a directory
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  cycloid export --dir cad/                    # Disc CSV, equations, parameters, preview
  cycloid export --dir cad/ --dual-disc        # Adds the disc 2 CSV
  cycloid export --dir cad/ --no-preview -f    # Overwrite, skip the SVG")]
pub struct ExportCmd {
    /// Directory to write into (created if missing)
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// Skip the SVG preview
    #[arg(long, default_value_t = false)]
    pub no_preview: bool,

    /// Overwrite existing files
    #[arg(short, long, default_value_t = false)]
    pub force: bool,

    #[command(flatten)]
    pub drive: DriveArgs,
}

impl CommandRunner for ExportCmd {
    fn run(self, config: &LoadedConfig, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(config)?;
        Ok(result.format(format))
    }
}
