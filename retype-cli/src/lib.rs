//! retype CLI library
//!
//! This library provides the command-line interface for the retype text
//! normalizer.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod prompt;
pub mod translator;

pub use error::{CliError, CliResult};
