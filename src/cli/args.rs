//! Clap argument types.

use clap::Parser;

/// Minimal arithmetic calculator. Prints sample computations when run
/// without a command.
#[derive(Parser, Debug)]
#[command(name = "arith", version = arith::constants::VERSION)]
pub struct Cli {
    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(clap::Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print one sample computation per operation (the default).
    Demo,

    /// Print version and build information.
    Version,
}
