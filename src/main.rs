//! # typography-hacks
//!
//! Command-line front end for the typography pipeline: reads text from `--text` or stdin,
//! applies the enabled hacks, and prints HTML, plain text, or the token tree as JSON.
//!
//! Features come from `config.json` in the platform config directory (or `--config`),
//! with command-line flags layered on top.

mod cli;
mod run;

use std::io;

use clap::{CommandFactory, Parser};

use cli::{Args, Commands};
use typography_hacks::core::app;

fn main() {
    let args = Args::parse();
    run::init_logger(&args);

    let result = match &args.command {
        Some(Commands::Completions { shell }) => {
            cli::generate(*shell, &mut Args::command(), app::NAME, &mut io::stdout());
            Ok(())
        }
        Some(Commands::Config) => run::run_config(&args),
        None => run::run_process(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
