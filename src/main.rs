//! arith — minimal arithmetic calculator.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use arith::constants;
use arith::demo;
use arith::logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use cli::args::{Cli, Command};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    tracing::debug!(command = ?cli.command, "starting");

    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => run_demo(),
        Command::Version => run_version(),
    }
}

/// Print the sample computations to stdout.
fn run_demo() -> Result<()> {
    let stdout = std::io::stdout();
    demo::render(&mut stdout.lock())
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}
