//! Corrections command implementation

use anyhow::Result;
use clap::Args;
use retype_core::CorrectionTable;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the corrections command
#[derive(Debug, Args)]
pub struct CorrectionsArgs {
    /// Configuration file whose extra corrections are included
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl CorrectionsArgs {
    /// Execute the corrections command
    pub fn execute(&self) -> Result<()> {
        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let table = config.correction_table();

        let stdout = io::stdout();
        write_table(&table, &mut stdout.lock())?;
        Ok(())
    }
}

/// Print the table in match order, one entry per line
pub fn write_table<W: Write>(table: &CorrectionTable, writer: &mut W) -> io::Result<()> {
    let width = table.iter().map(|entry| entry.from.len()).max().unwrap_or(0);

    for entry in table.iter() {
        writeln!(writer, "{:<width$}  ->  {}", entry.from, entry.to)?;
    }
    writeln!(writer)?;
    writeln!(writer, "{} corrections", table.len())?;
    Ok(())
}
