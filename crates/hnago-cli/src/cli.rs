use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Show how long ago a Hacker News item was posted
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Opts {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub cmd: OptsCmd,
}

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Current time in (fractional) seconds since the Unix epoch, instead of
    /// the system clock
    #[arg(long, env = "HNAGO_NOW", global = true)]
    pub now: Option<f64>,
}

impl GlobalOpts {
    pub fn now_secs(&self) -> f64 {
        self.now.unwrap_or_else(hnago_util_fmt::now_secs)
    }
}

#[derive(Debug, Subcommand)]
pub enum OptsCmd {
    /// Format the time elapsed since a Unix timestamp
    Since { timestamp: u64 },

    /// Summarize a post or comment JSON document
    Item {
        /// File to read, stdin if missing or `-`
        path: Option<PathBuf>,
    },
}
