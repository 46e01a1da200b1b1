//! Order a JSON roster and print it as tab-separated rows.

use anyhow::Result;
use clap::Parser;
use roster_config::cli::{self, Cli};

fn main() -> Result<()> {
    cli::run(Cli::parse())
}
