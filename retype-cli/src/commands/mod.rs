//! CLI command implementations

use clap::Subcommand;

pub mod corrections;
pub mod generate_config;
pub mod process;
pub mod translate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Normalize a text file, then optionally translate it
    Process(process::ProcessArgs),

    /// Translate an already normalized file in place
    Translate(translate::TranslateArgs),

    /// List the corrections applied to words
    Corrections(corrections::CorrectionsArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self, quiet: bool) -> anyhow::Result<()> {
        match self {
            Commands::Process(args) => args.execute(quiet),
            Commands::Translate(args) => args.execute(quiet),
            Commands::Corrections(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}
