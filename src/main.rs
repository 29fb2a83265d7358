use clap::Parser;

use cycloid_drive::cli::Args;
use cycloid_drive::commands::CommandRunner;
use cycloid_drive::config::LoadedConfig;
use cycloid_drive::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = LoadedConfig::resolve(args.config)?;
    let output = args.command.run(&config, args.format)?;
    println!("{}", output);
    Ok(())
}
