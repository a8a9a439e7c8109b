//! Formatting configuration

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Default configuration constants
pub mod defaults {
    /// Column count after which a line break is inserted at the next word boundary
    pub const WRAP_WIDTH: usize = 90;

    /// Number of spaces emitted after every sentence terminator
    pub const SENTENCE_PADDING: usize = 2;

    /// Largest accepted sentence padding
    pub const MAX_SENTENCE_PADDING: usize = 32;
}

/// Formatting configuration for one normalization run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Line wrap threshold in emitted characters
    pub wrap_width: usize,
    /// Spaces written after `.`, `!` and `?`
    pub sentence_padding: usize,
    /// Rewrite words through the correction table
    pub corrections: bool,
    /// Insert line breaks once `wrap_width` is exceeded
    pub wrap: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wrap_width: defaults::WRAP_WIDTH,
            sentence_padding: defaults::SENTENCE_PADDING,
            corrections: true,
            wrap: true,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The base machine: same spacing and capitalization, but no word
    /// corrections and no line wrapping
    pub fn plain(self) -> Self {
        Self {
            corrections: false,
            wrap: false,
            ..self
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Error> {
        if self.wrap_width == 0 {
            return Err(Error::Configuration(
                "wrap_width must be greater than 0".into(),
            ));
        }

        if self.sentence_padding > defaults::MAX_SENTENCE_PADDING {
            return Err(Error::Configuration(format!(
                "sentence_padding must not exceed {}",
                defaults::MAX_SENTENCE_PADDING
            )));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    wrap_width: Option<usize>,
    sentence_padding: Option<usize>,
    corrections: Option<bool>,
    wrap: Option<bool>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line wrap threshold
    pub fn wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = Some(width);
        self
    }

    /// Set the number of spaces after a sentence terminator
    pub fn sentence_padding(mut self, spaces: usize) -> Self {
        self.sentence_padding = Some(spaces);
        self
    }

    /// Enable or disable word corrections
    pub fn corrections(mut self, enabled: bool) -> Self {
        self.corrections = Some(enabled);
        self
    }

    /// Enable or disable line wrapping
    pub fn wrap(mut self, enabled: bool) -> Self {
        self.wrap = Some(enabled);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if let Some(width) = self.wrap_width {
            config.wrap_width = width;
        }

        if let Some(spaces) = self.sentence_padding {
            config.sentence_padding = spaces;
        }

        if let Some(enabled) = self.corrections {
            config.corrections = enabled;
        }

        if let Some(enabled) = self.wrap {
            config.wrap = enabled;
        }

        config.validate()?;
        Ok(config)
    }
}
