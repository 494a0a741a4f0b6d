//! keydist CLI binary.

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use keydist::cli::args::*;
use keydist::cli::commands::*;

fn main() -> anyhow::Result<()> {
    // Parse command line arguments using clap
    let args = KeydistArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (3+)
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    execute_command(args).context("keydist failed")
}
