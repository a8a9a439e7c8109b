//! Process command implementation

use anyhow::{Context, Result};
use clap::Args;
use retype_core::process;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use super::translate::{is_recoverable, translate_file, TranslationOptions};
use crate::config::CliConfig;
use crate::input::FileReader;
use crate::output::FileWriter;
use crate::prompt::{Prompter, LANGUAGE_QUESTION, TRANSLATE_QUESTION};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input text file
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Output file, truncated before writing
    #[arg(short, long, value_name = "FILE", default_value = "output.txt")]
    pub output: PathBuf,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Line wrap threshold in columns
    #[arg(short, long, value_name = "COLUMNS")]
    pub width: Option<usize>,

    /// Spaces written after each sentence terminator
    #[arg(long, value_name = "SPACES")]
    pub padding: Option<usize>,

    /// Base machine only: no word corrections and no line wrapping
    #[arg(long)]
    pub plain: bool,

    /// Translate into this 2-letter language without prompting
    #[arg(short, long, value_name = "CODE", conflicts_with = "no_translate")]
    pub translate: Option<String>,

    /// Skip the translation prompt
    #[arg(long)]
    pub no_translate: bool,

    #[command(flatten)]
    pub translation: TranslationOptions,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let mut formatting = config.formatting_with(self.width, self.padding)?;
        if self.plain {
            formatting = formatting.plain();
        }
        let table = config.correction_table();

        log::info!("Normalizing {}", self.input.display());
        log::debug!("Arguments: {:?}", self);
        log::debug!(
            "Formatting: width={} (wrap={}), padding={}, {} corrections (enabled={})",
            formatting.wrap_width,
            formatting.wrap,
            formatting.sentence_padding,
            table.len(),
            formatting.corrections
        );

        let reader = FileReader::open(&self.input)?;
        log::debug!("Input size: {} bytes", FileReader::file_size(&self.input)?);
        let writer = FileWriter::create(&self.output)?;

        let stats = process(reader, writer, &formatting, &table)
            .with_context(|| format!("Failed to normalize {}", self.input.display()))?;

        log::info!(
            "Wrote {}: {} words, {} corrections, {} sentences, {} line breaks",
            self.output.display(),
            stats.words,
            stats.corrections,
            stats.sentences,
            stats.line_breaks
        );

        let target = self.translation_target(&mut Prompter::stdio())?;
        if let Some(code) = target {
            let width = if formatting.wrap {
                formatting.wrap_width
            } else {
                usize::MAX
            };
            let outcome =
                translate_file(&self.output, &code, width, &config, &self.translation, quiet);
            settle_translation(outcome)?;
        }

        Ok(())
    }

    /// Decide on a target language from flags or by asking
    pub fn translation_target<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Option<String>> {
        if self.no_translate {
            return Ok(None);
        }
        if let Some(code) = &self.translate {
            return Ok(Some(code.clone()));
        }

        if !prompter.confirm(TRANSLATE_QUESTION)? {
            return Ok(None);
        }

        let code = prompter.ask(LANGUAGE_QUESTION)?;
        Ok(code.filter(|code| !code.is_empty()))
    }
}

/// Report a recoverable translation failure and keep the untranslated
/// output; anything else aborts the run
fn settle_translation(outcome: Result<()>) -> Result<()> {
    match outcome {
        Err(err) if is_recoverable(&err) => {
            log::warn!("Translation skipped: {err:#}");
            eprintln!("(!) There was an error: {err}");
            eprintln!("{}", crate::error::TRANSLATION_HINT);
            Ok(())
        }
        outcome => outcome,
    }
}
