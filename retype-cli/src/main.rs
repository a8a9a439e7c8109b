//! retype command-line entry point

use anyhow::Result;
use clap::Parser;
use retype_cli::commands::Commands;

/// Normalize raw text: sentence spacing, capitalization, word corrections and line wrapping
#[derive(Debug, Parser)]
#[command(name = "retype", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress logging and progress output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    cli.command.execute(cli.quiet)
}

/// Initialize logging based on verbosity level
fn init_logging(quiet: bool, verbose: u8) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}
