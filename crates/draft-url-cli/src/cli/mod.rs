//! CLI for the draft-url log filter.

mod commands;

use anyhow::Result;
use clap::Parser;
use std::io;

pub use commands::run_extract;

/// Read deploy logs on stdin and print the draft URL as a CI `set-output` line.
#[derive(Debug, Parser)]
#[command(name = "draft-url", version)]
#[command(
    about = "Extract the deploy-preview draft URL from provider logs on stdin",
    long_about = "Reads deploy logs on stdin, finds the first `Website Draft URL: ...https://...` \
                  line and prints `::set-output name=draft_url::<url>` on stdout. \
                  Exits non-zero, echoing the logs, when no draft URL is present."
)]
pub struct Cli {}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let _cli = Cli::parse();

        let stdin = io::stdin().lock();
        let stdout = io::stdout().lock();
        run_extract(stdin, stdout)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests;
