//! Sunmap CLI Binary
//!
//! Command-line interface for rendering source maps as sunburst HTML pages.

use clap::Parser;
use std::process;
use sunmap::logging::{init_logging, LoggingConfig};
use sunmap::tooling::cli::{Cli, CliContext};

fn main() {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::default();
    if let Some(level) = cli.log_level.clone() {
        logging.level = level;
    }
    if let Some(format) = cli.log_format.clone() {
        logging.format = format;
    }
    if let Some(output) = cli.log_output.clone() {
        logging.output = output;
    }
    if let Err(e) = init_logging(Some(&logging)) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    let context = match CliContext::new(cli.dir.clone(), cli.title.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error initializing output directory: {}", e);
            process::exit(1);
        }
    };

    match context.execute(&cli.files) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
