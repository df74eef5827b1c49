pub mod cli;
pub mod summary;

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use hnago_core::Item;
use snafu::{ResultExt, Snafu};
use tracing::{debug, info};

use crate::cli::{Opts, OptsCmd};

pub const LOG_TARGET: &str = "hnago::cli";

#[derive(Debug, Snafu)]
pub enum CliError {
    #[snafu(display("Failed to read item from {}", path.display()))]
    Input { source: io::Error, path: PathBuf },
    #[snafu(display("Failed to parse item"))]
    Json { source: serde_json::Error },
    #[snafu(display("Failed to write output"))]
    Output { source: io::Error },
    #[snafu(display("Logging initialization failed"))]
    Logging,
}

pub type CliResult<T> = std::result::Result<T, CliError>;

/// Execute `opts`, reading item documents from `stdin` when no file is given
pub fn run(opts: &Opts, stdin: impl Read, out: &mut impl Write) -> CliResult<()> {
    let now_secs = opts.global.now_secs();
    debug!(target: LOG_TARGET, now_secs, "Current time");

    let line = match &opts.cmd {
        OptsCmd::Since { timestamp } => {
            hnago_util_fmt::format_seconds_since_at(now_secs, *timestamp)
        }
        OptsCmd::Item { path } => {
            let bytes = read_input(path.as_deref(), stdin)?;
            let item = Item::from_json_slice(&bytes).context(JsonSnafu)?;
            info!(target: LOG_TARGET, id = %item.id(), by = item.by(), "Loaded item");
            summary::summarize(&item, now_secs)
        }
    };

    writeln!(out, "{line}").context(OutputSnafu)?;
    Ok(())
}

fn read_input(path: Option<&Path>, mut stdin: impl Read) -> CliResult<Vec<u8>> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read(path).context(InputSnafu { path }),
        _ => {
            let mut bytes = Vec::new();
            stdin
                .read_to_end(&mut bytes)
                .context(InputSnafu { path: "-" })?;
            Ok(bytes)
        }
    }
}
