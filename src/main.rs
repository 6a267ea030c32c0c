//! `update_dependent` command-line entry point.
use anyhow::{Context as _, Result};
use clap::Parser;
use std::io::Write as _;

use update_dependent::cli::Cli;
use update_dependent::commands;
use update_dependent::config::Options;
use update_dependent::logging::{self, Logger};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    logging::init_subscriber(args.verbose);
    let log = Logger::new();

    let options = Options::try_from(&args)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = commands::run(&options, &log, &mut out)?;
    out.flush().context("flushing stdout")?;

    log.debug(&format!("done, modified: {}", outcome.modified));
    Ok(())
}
