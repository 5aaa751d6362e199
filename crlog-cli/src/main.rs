//! crlog: collapse carriage-return overwrites in captured terminal output

use clap::Parser;
use crlog_cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.filter.execute()
}
