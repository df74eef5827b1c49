use std::io;

use clap::Parser;
use hnago_cli::cli::Opts;
use hnago_cli::{CliError, CliResult};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[snafu::report]
fn main() -> CliResult<()> {
    init_logging()?;

    let opts = Opts::parse();

    hnago_cli::run(&opts, io::stdin().lock(), &mut io::stdout().lock())
}

fn init_logging() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .try_init()
        .map_err(|_| CliError::Logging)?;

    Ok(())
}
