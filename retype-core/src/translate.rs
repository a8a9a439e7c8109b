//! Translation post-processing contract
//!
//! The actual translation service lives outside this crate. Anything that
//! can turn text into text for a two-letter target language implements
//! [`Translator`]; [`post_process`] validates the code, calls it once and
//! re-wraps the result.

use crate::wrap::rewrap_translated;
use thiserror::Error;

/// Any failure of the translation step.
///
/// Callers are expected to treat every variant the same way: report it and
/// keep the untranslated output.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// Target language is not a two-letter code
    #[error("invalid language code '{0}': expected a 2-letter code such as 'fr' or 'es'")]
    InvalidLanguageCode(String),

    /// The request never produced a response
    #[error("translation request failed: {0}")]
    Transport(String),

    /// The service answered with an error
    #[error("translation service returned {status}: {message}")]
    Service {
        /// HTTP status or service error code
        status: u16,
        /// Message reported by the service
        message: String,
    },

    /// The response could not be understood
    #[error("malformed translation response: {0}")]
    MalformedResponse(String),
}

/// External translation collaborator
pub trait Translator {
    /// Translate `text` into `target_language` (a validated 2-letter code)
    fn translate(&self, text: &str, target_language: &str) -> Result<String, TranslationError>;

    /// Name used in log output
    fn name(&self) -> &str;
}

/// Check that `code` is exactly two ASCII letters and lowercase it
pub fn validate_language_code(code: &str) -> Result<String, TranslationError> {
    let trimmed = code.trim();
    if trimmed.len() == 2 && trimmed.chars().all(|ch| ch.is_ascii_alphabetic()) {
        Ok(trimmed.to_ascii_lowercase())
    } else {
        Err(TranslationError::InvalidLanguageCode(code.to_string()))
    }
}

/// Translate finished output and wrap the translation at `width`
pub fn post_process(
    text: &str,
    language_code: &str,
    translator: &dyn Translator,
    width: usize,
) -> Result<String, TranslationError> {
    let target = validate_language_code(language_code)?;
    let translated = translator.translate(text, &target)?;
    Ok(rewrap_translated(&translated, width))
}
