//! CLI command implementations

use clap::Parser;

pub mod filter;

pub use filter::FilterArgs;

/// Collapse carriage-return overwrites in captured terminal logs
#[derive(Debug, Parser)]
#[command(name = "crlog", version)]
#[command(
    about = "Collapse carriage-return overwrites in captured terminal logs",
    long_about = "Reads a byte stream and replays carriage returns the way a terminal \
                  displays them, so progress bars captured into a log file collapse to \
                  their final state. Lines ending in a line feed pass through unchanged. \
                  Filtered output goes to standard output unless --output is given."
)]
pub struct Cli {
    #[command(flatten)]
    pub filter: FilterArgs,
}
