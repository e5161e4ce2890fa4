use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pimate_common::ActionId;

/// PiMate: remote control for a home server.
#[derive(Parser, Debug)]
#[command(name = "pimate", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Server base URL override, e.g. http://pi.local:5000.
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Log filter override (e.g. debug, pimate_client=trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Poll system metrics and print each reading.
    Watch {
        /// Poll interval in milliseconds (defaults to the configured one).
        #[arg(long)]
        interval_ms: Option<u32>,

        /// Stop after this many successful readings.
        #[arg(long)]
        count: Option<usize>,
    },

    /// Dispatch one action by its wire name (see `pimate actions`).
    Run { action: ActionId },

    /// Turn the volume up or down.
    Volume { direction: String },

    /// Open a configured link by name, or any http(s) URL.
    Open { target: String },

    /// List available actions.
    Actions,

    /// List configured links.
    Links,
}

pub fn parse() -> Args {
    Args::parse()
}
