//! Translate command and the shared translation post-processing step

use anyhow::Result;
use clap::Args;
use retype_core::{post_process, validate_language_code, TranslationError, Translator};
use std::path::{Path, PathBuf};

use crate::config::CliConfig;
use crate::error::{CliError, TRANSLATION_HINT};
use crate::input::FileReader;
use crate::output::FileWriter;
use crate::progress::ProgressReporter;
use crate::translator::GoogleTranslator;

/// Translation service options shared by `process` and `translate`
#[derive(Debug, Default, Args)]
pub struct TranslationOptions {
    /// API key for the translation service
    #[arg(long, env = "RETYPE_TRANSLATE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Translation endpoint, overriding the configuration file
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,
}

impl TranslationOptions {
    /// Build the HTTP translator for these options
    pub fn translator(&self, config: &CliConfig) -> Result<GoogleTranslator> {
        let api_key = self.api_key.clone().ok_or(CliError::MissingApiKey)?;

        let mut service = config.translation.clone();
        if let Some(endpoint) = &self.endpoint {
            service.endpoint = endpoint.clone();
        }

        Ok(GoogleTranslator::new(&service, api_key)?)
    }
}

/// Arguments for the translate command
#[derive(Debug, Args)]
pub struct TranslateArgs {
    /// Previously normalized file, replaced by its translation
    #[arg(short, long, value_name = "FILE", required = true)]
    pub file: PathBuf,

    /// Target language as a 2-letter code
    #[arg(long, value_name = "CODE", required = true)]
    pub to: String,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Line wrap threshold for the translated text
    #[arg(short, long, value_name = "COLUMNS")]
    pub width: Option<usize>,

    #[command(flatten)]
    pub translation: TranslationOptions,
}

impl TranslateArgs {
    /// Execute the translate command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let width = config.formatting_with(self.width, None)?.wrap_width;

        match translate_file(&self.file, &self.to, width, &config, &self.translation, quiet) {
            Err(err) if is_recoverable(&err) => {
                eprintln!("{TRANSLATION_HINT}");
                Err(CliError::TranslationFailed(format!("{err:#}")).into())
            }
            outcome => outcome,
        }
    }
}

/// Translate `path` in place through the configured HTTP service
pub fn translate_file(
    path: &Path,
    language_code: &str,
    width: usize,
    config: &CliConfig,
    options: &TranslationOptions,
    quiet: bool,
) -> Result<()> {
    let target = validate_language_code(language_code)?;
    let translator = options.translator(config)?;
    run_translation(path, &target, width, &translator, quiet)
}

/// Translate `path` in place with `translator`.
///
/// On any failure the file is left exactly as it was.
pub fn run_translation(
    path: &Path,
    language_code: &str,
    width: usize,
    translator: &dyn Translator,
    quiet: bool,
) -> Result<()> {
    let text = FileReader::read_text(path)?;

    log::info!(
        "Translating {} into '{}' via {}",
        path.display(),
        language_code,
        translator.name()
    );

    let spinner = ProgressReporter::spinner(quiet, "Translating text...");
    match post_process(&text, language_code, translator, width) {
        Ok(translated) => {
            spinner.finish("Translation complete!");
            FileWriter::overwrite(path, &translated)?;
            log::info!("Wrote translation to {}", path.display());
            Ok(())
        }
        Err(err) => {
            spinner.clear();
            Err(err.into())
        }
    }
}

/// Whether a translation failure should leave the untranslated output in
/// place rather than abort the run
pub fn is_recoverable(err: &anyhow::Error) -> bool {
    err.downcast_ref::<TranslationError>().is_some()
        || matches!(err.downcast_ref::<CliError>(), Some(CliError::MissingApiKey))
}

#[cfg(test)]
mod tests {
    use super::*;
    use retype_core::rewrap_translated;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    /// Answers every request with the same text and records what it was asked
    struct CannedTranslator {
        reply: &'static str,
        requests: RefCell<Vec<(String, String)>>,
    }

    impl CannedTranslator {
        fn new(reply: &'static str) -> Self {
            Self {
                reply,
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl Translator for CannedTranslator {
        fn translate(&self, text: &str, target: &str) -> Result<String, TranslationError> {
            self.requests
                .borrow_mut()
                .push((text.to_string(), target.to_string()));
            Ok(self.reply.to_string())
        }

        fn name(&self) -> &str {
            "canned"
        }
    }

    struct RejectingTranslator;

    impl Translator for RejectingTranslator {
        fn translate(&self, _text: &str, _target: &str) -> Result<String, TranslationError> {
            Err(TranslationError::Service {
                status: 400,
                message: "Invalid Value".into(),
            })
        }

        fn name(&self) -> &str {
            "rejecting"
        }
    }

    /// Replaces the output file with a directory while "translating"
    struct ClobberingTranslator<'a> {
        path: &'a Path,
    }

    impl Translator for ClobberingTranslator<'_> {
        fn translate(&self, _text: &str, _target: &str) -> Result<String, TranslationError> {
            fs::remove_file(self.path).unwrap();
            fs::create_dir(self.path).unwrap();
            fs::write(self.path.join("placeholder"), "x").unwrap();
            Ok("Bonjour.  ".to_string())
        }

        fn name(&self) -> &str {
            "clobbering"
        }
    }

    fn normalized_file(temp_dir: &TempDir) -> PathBuf {
        let path = temp_dir.path().join("output.txt");
        fs::write(&path, "Hello everyone?  I am well!").unwrap();
        path
    }

    #[test]
    fn test_successful_translation_replaces_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = normalized_file(&temp_dir);
        let reply = "Bonjour tout le monde?  Ca va bien!";
        let translator = CannedTranslator::new(reply);

        run_translation(&path, "fr", 10, &translator, true).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, rewrap_translated(reply, 10));
        assert_eq!(content, "Bonjour tout \nle monde?  \nCa va bien!\n");
        assert_eq!(
            *translator.requests.borrow(),
            vec![("Hello everyone?  I am well!".to_string(), "fr".to_string())]
        );
    }

    #[test]
    fn test_service_rejection_leaves_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = normalized_file(&temp_dir);

        let err = run_translation(&path, "fr", 90, &RejectingTranslator, true).unwrap_err();

        assert!(is_recoverable(&err));
        assert!(err.to_string().contains("Invalid Value"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Hello everyone?  I am well!"
        );
    }

    #[test]
    fn test_write_failure_is_not_recoverable() {
        let temp_dir = TempDir::new().unwrap();
        let path = normalized_file(&temp_dir);
        let translator = ClobberingTranslator { path: &path };

        let err = run_translation(&path, "fr", 90, &translator, true).unwrap_err();

        assert!(!is_recoverable(&err));
        assert!(err.to_string().contains("Failed to write to"));
        assert!(path.is_dir());
    }

    #[test]
    fn test_missing_input_is_not_recoverable() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.txt");
        let translator = CannedTranslator::new("Bonjour.");

        let err = run_translation(&path, "fr", 90, &translator, true).unwrap_err();

        assert!(!is_recoverable(&err));
        assert!(translator.requests.borrow().is_empty());
    }

    #[test]
    fn test_invalid_code_leaves_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("output.txt");
        fs::write(&path, "Hello.  ").unwrap();

        let options = TranslationOptions {
            api_key: Some("key".to_string()),
            endpoint: None,
        };
        let err = translate_file(&path, "french", 90, &CliConfig::default(), &options, true)
            .unwrap_err();

        assert!(is_recoverable(&err));
        assert!(err.to_string().contains("invalid language code"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "Hello.  ");
    }

    #[test]
    fn test_missing_api_key() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("output.txt");
        fs::write(&path, "Hello.  ").unwrap();

        let err = translate_file(
            &path,
            "fr",
            90,
            &CliConfig::default(),
            &TranslationOptions::default(),
            true,
        )
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::MissingApiKey)
        ));
        assert!(is_recoverable(&err));
        assert_eq!(fs::read_to_string(&path).unwrap(), "Hello.  ");
    }

    #[test]
    fn test_unreachable_service_leaves_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("output.txt");
        fs::write(&path, "Hello.  ").unwrap();

        let options = TranslationOptions {
            api_key: Some("key".to_string()),
            endpoint: Some("http://127.0.0.1:9/translate".to_string()),
        };
        let err = translate_file(&path, "fr", 90, &CliConfig::default(), &options, true)
            .unwrap_err();

        assert!(is_recoverable(&err));
        assert_eq!(fs::read_to_string(&path).unwrap(), "Hello.  ");
    }
}
