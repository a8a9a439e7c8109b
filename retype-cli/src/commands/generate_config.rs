//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use retype_core::config::defaults;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to adjust wrapping or add corrections");
        println!("2. Use it for processing:");
        println!(
            "   retype process -i input.txt -c {}",
            self.output.display()
        );

        Ok(())
    }
}

/// Generate template configuration content
pub fn generate_template() -> String {
    format!(
        r#"# retype configuration

[formatting]
# Break the line at the next word boundary once this many columns are exceeded
wrap_width = {wrap_width}

# Spaces written after every '.', '!' and '?'
sentence_padding = {padding}

# Set both to false for the base machine (spacing and capitalization only)
corrections = true
wrap = true

[translation]
# Google Translate v2 compatible endpoint
endpoint = "https://translation.googleapis.com/language/translate/v2"

# Language of the normalized text
source_language = "en"

# Request timeout in seconds
timeout_secs = 30

# The API key is never read from this file; use --api-key or
# the RETYPE_TRANSLATE_API_KEY environment variable.

# Extra whole-word corrections, matched case-insensitively after the
# built-in table. Built-in entries win over duplicates.
# [[corrections]]
# from = "teh"
# to = "the"
"#,
        wrap_width = defaults::WRAP_WIDTH,
        padding = defaults::SENTENCE_PADDING,
    )
}
