//! Diagra CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use diagra_cli::{Args, error_adapter::render_report};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Diagra");
    debug!(args:?; "Parsed arguments");

    let summary = match diagra_cli::run(&args) {
        Ok(summary) => summary,
        Err(err) => {
            error!("Failed\n{}", render_report(&err));
            process::exit(1);
        }
    };

    for path in summary.created() {
        println!("Created: {}", path.display());
    }
    if !summary.failed().is_empty() {
        println!("Failed: {} file(s)", summary.failed().len());
    }
    println!("Total time: {} ms", summary.total().as_millis());

    info!("Completed successfully");
}
