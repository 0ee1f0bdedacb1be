//! CLI entrypoint for `stubsmith`.

use clap::Parser;
use stubsmith_cli::cli::Args;
use stubsmith_cli::{CliError, app, config, logging};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    run().map_err(color_eyre::eyre::Report::from)
}

fn run() -> Result<(), CliError> {
    let args = Args::parse();
    let settings = config::load(&args)?;
    logging::init(&settings.log_level)?;
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    app::run(&args, &settings, &mut handle)?;
    Ok(())
}
