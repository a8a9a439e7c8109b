//! Configuration file support

use anyhow::{Context, Result};
use retype_core::{Config, CorrectionEntry, CorrectionTable};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Wrapping and sentence spacing
    #[serde(default)]
    pub formatting: Config,

    /// Translation service settings
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Extra corrections appended after the built-in table
    #[serde(default)]
    pub corrections: Vec<CorrectionEntry>,
}

/// Translation-related configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TranslationConfig {
    /// Google Translate v2 compatible endpoint
    pub endpoint: String,

    /// Language of the normalized text
    pub source_language: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://translation.googleapis.com/language/translate/v2".to_string(),
            source_language: "en".to_string(),
            timeout_secs: 30,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Formatting config with command-line overrides applied
    pub fn formatting_with(
        &self,
        wrap_width: Option<usize>,
        sentence_padding: Option<usize>,
    ) -> Result<Config> {
        let config = Config::builder()
            .wrap_width(wrap_width.unwrap_or(self.formatting.wrap_width))
            .sentence_padding(sentence_padding.unwrap_or(self.formatting.sentence_padding))
            .corrections(self.formatting.corrections)
            .wrap(self.formatting.wrap)
            .build()
            .map_err(|e| match e {
                retype_core::Error::Configuration(msg) => CliError::ConfigError(msg),
                other => CliError::ConfigError(other.to_string()),
            })?;
        Ok(config)
    }

    /// Built-in corrections followed by the configured extras
    pub fn correction_table(&self) -> CorrectionTable {
        CorrectionTable::default().with_entries(
            self.corrections
                .iter()
                .map(|entry| CorrectionEntry::new(entry.from.as_str(), entry.to.as_str())),
        )
    }
}
