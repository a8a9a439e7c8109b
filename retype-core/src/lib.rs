//! Finite-state text normalizer
//!
//! `retype-core` rewrites a raw character stream into tidy prose: one space
//! between words, fixed padding after every sentence terminator, capitalized
//! sentence starts, whole-word corrections for common contractions and
//! misspellings, and fixed-width line wrapping.
//!
//! # Architecture
//!
//! - **classify**: maps each character to terminator, whitespace, printable or other
//! - **corrections** / **rewrite**: the whole-word correction table and how a word is rewritten
//! - **transducer**: the three-state machine buffering words between boundaries
//! - **wrap**: column tracking and line breaks at word boundaries
//! - **driver**: one session per stream, end-of-stream flush
//! - **translate**: the contract for an optional translation pass
//!
//! # Example
//!
//! ```rust
//! use retype_core::{normalize, Config, CorrectionTable};
//!
//! let table = CorrectionTable::default();
//! let text = "i cant beleive it.  im happy";
//! let out = normalize(text, &Config::default(), &table);
//!
//! assert_eq!(out, "I cant beleive it.  I am happy");
//! ```

pub mod classify;
pub mod config;
pub mod corrections;
pub mod driver;
pub mod error;
mod rewrite;
pub mod transducer;
pub mod translate;
pub mod wrap;

pub use classify::{classify, CharClass};
pub use config::{Config, ConfigBuilder};
pub use corrections::{CorrectionEntry, CorrectionTable, DEFAULT_CORRECTIONS};
pub use driver::{normalize, process, ProcessingStats, Session};
pub use error::{Error, Result};
pub use transducer::{State, Transducer, TransducerStats};
pub use translate::{post_process, validate_language_code, TranslationError, Translator};
pub use wrap::{rewrap_translated, LineWrapper};
