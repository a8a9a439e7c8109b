//! Whole-word correction table
//!
//! Entries are matched against the lowercased word in full; there is no
//! substring or pattern matching. When two entries share a match form the
//! earlier one wins.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single `from -> to` correction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionEntry {
    /// Lowercase match form
    pub from: String,
    /// Replacement text
    pub to: String,
}

impl CorrectionEntry {
    /// Create an entry, lowercasing the match form
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into().to_ascii_lowercase(),
            to: to.into(),
        }
    }
}

/// Stock corrections, in match order
pub const DEFAULT_CORRECTIONS: &[(&str, &str)] = &[
    ("i", "I"),
    // contractions
    ("they're", "they are"),
    ("can't", "cannot"),
    ("won't", "will not"),
    ("don't", "do not"),
    ("i've", "I have"),
    ("i'll", "I will"),
    ("i'd", "I would"),
    ("i'm", "I am"),
    ("im", "I am"),
    ("she's", "she is"),
    ("he's", "he is"),
    ("it's", "it is"),
    ("there's", "there is"),
    ("we're", "we are"),
    ("you've", "you have"),
    ("couldn't", "could not"),
    ("shouldn't", "should not"),
    ("wouldn't", "would not"),
    // common misspellings
    ("accomodate", "accommodate"),
    ("wich", "which"),
    ("recieve", "receive"),
    ("untill", "until"),
    ("occured", "occurred"),
    ("seperate", "separate"),
    ("goverment", "government"),
    ("definately", "definitely"),
    ("pharoah", "pharaoh"),
    ("publically", "publicly"),
    // custom token
    ("the-goat", "Mr. Jimenez"),
];

/// Ordered correction table with a first-match key index
#[derive(Debug, Clone)]
pub struct CorrectionTable {
    entries: Vec<CorrectionEntry>,
    index: HashMap<String, usize>,
}

impl Default for CorrectionTable {
    fn default() -> Self {
        Self::new().with_entries(
            DEFAULT_CORRECTIONS
                .iter()
                .map(|(from, to)| CorrectionEntry::new(*from, *to)),
        )
    }
}

impl CorrectionTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Append entries after the existing ones.
    ///
    /// An entry whose match form is already present is kept in the listing
    /// but never matches.
    pub fn with_entries(mut self, entries: impl IntoIterator<Item = CorrectionEntry>) -> Self {
        for entry in entries {
            self.push(entry);
        }
        self
    }

    /// Append one entry
    pub fn push(&mut self, entry: CorrectionEntry) {
        let position = self.entries.len();
        self.index.entry(entry.from.clone()).or_insert(position);
        self.entries.push(entry);
    }

    /// Look up the replacement for an already-lowercased word
    pub fn lookup(&self, folded: &str) -> Option<&str> {
        self.index
            .get(folded)
            .map(|&position| self.entries[position].to.as_str())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in match order
    pub fn iter(&self) -> impl Iterator<Item = &CorrectionEntry> {
        self.entries.iter()
    }
}
