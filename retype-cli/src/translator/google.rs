//! Client for Google Translate v2 compatible endpoints

use reqwest::blocking::Client;
use retype_core::{TranslationError, Translator};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::config::TranslationConfig;

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Debug, Deserialize)]
struct TranslateData {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Blocking HTTP translator
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
    api_key: String,
    source_language: String,
}

impl GoogleTranslator {
    /// Build a translator from configuration and an API key
    pub fn new(
        config: &TranslationConfig,
        api_key: impl Into<String>,
    ) -> Result<Self, TranslationError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.timeout_secs.min(10)))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TranslationError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: api_key.into(),
            source_language: config.source_language.clone(),
        })
    }

    fn request_body(&self, text: &str, target_language: &str) -> serde_json::Value {
        json!({
            "q": [text],
            "source": self.source_language,
            "target": target_language,
            "format": "text",
        })
    }
}

impl Translator for GoogleTranslator {
    fn translate(&self, text: &str, target_language: &str) -> Result<String, TranslationError> {
        log::debug!(
            "POST {} ({} bytes, {} -> {})",
            self.endpoint,
            text.len(),
            self.source_language,
            target_language
        );

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&self.request_body(text, target_language))
            .send()
            .map_err(|e| TranslationError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| TranslationError::Transport(e.to_string()))?;

        parse_response(status, &body)
    }

    fn name(&self) -> &str {
        "google-v2"
    }
}

/// Turn a raw HTTP status and body into translated text
fn parse_response(status: u16, body: &str) -> Result<String, TranslationError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| body.trim().to_string());
        return Err(TranslationError::Service { status, message });
    }

    let parsed: TranslateResponse = serde_json::from_str(body)
        .map_err(|e| TranslationError::MalformedResponse(e.to_string()))?;

    parsed
        .data
        .translations
        .into_iter()
        .next()
        .map(|t| t.translated_text)
        .ok_or_else(|| TranslationError::MalformedResponse("no translations returned".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success() {
        let body = r#"{"data":{"translations":[
            {"translatedText":"Bonjour.  ","detectedSourceLanguage":"en"}
        ]}}"#;
        assert_eq!(parse_response(200, body).unwrap(), "Bonjour.  ");
    }

    #[test]
    fn test_parse_service_error() {
        let body = r#"{"error":{"code":400,"message":"Invalid Value","errors":[]}}"#;
        match parse_response(400, body) {
            Err(TranslationError::Service { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid Value");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_parse_non_json_error() {
        match parse_response(502, "Bad Gateway\n") {
            Err(TranslationError::Service { status, message }) => {
                assert_eq!(status, 502);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_parse_malformed_success() {
        assert!(matches!(
            parse_response(200, "<html></html>"),
            Err(TranslationError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_response(200, r#"{"data":{"translations":[]}}"#),
            Err(TranslationError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_request_body() {
        let translator = GoogleTranslator::new(&TranslationConfig::default(), "key").unwrap();
        let body = translator.request_body("Hello.  ", "fr");

        assert_eq!(body["q"][0], "Hello.  ");
        assert_eq!(body["source"], "en");
        assert_eq!(body["target"], "fr");
        assert_eq!(body["format"], "text");
        assert_eq!(translator.name(), "google-v2");
    }

    #[test]
    fn test_unreachable_endpoint_is_transport_error() {
        let config = TranslationConfig {
            endpoint: "http://127.0.0.1:9/translate".to_string(),
            timeout_secs: 2,
            ..TranslationConfig::default()
        };
        let translator = GoogleTranslator::new(&config, "key").unwrap();

        assert!(matches!(
            translator.translate("Hello", "fr"),
            Err(TranslationError::Transport(_))
        ));
    }
}
