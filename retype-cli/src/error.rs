//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Input file not found or inaccessible
    FileNotFound(String),
    /// Configuration error
    ConfigError(String),
    /// No API key available for the translation service
    MissingApiKey,
    /// Translation post-processing failed
    TranslationFailed(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::MissingApiKey => write!(
                f,
                "No translation API key: pass --api-key or set RETYPE_TRANSLATE_API_KEY"
            ),
            CliError::TranslationFailed(msg) => write!(f, "Translation failed: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

/// Corrective hint shown after any translation failure
pub const TRANSLATION_HINT: &str = "Perhaps the language was not entered in its 2-letter form \
(e.g. french -> fr, spanish -> es).\n\
See https://cloud.google.com/translate/docs/languages for the list of languages.";
