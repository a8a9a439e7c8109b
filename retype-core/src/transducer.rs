//! Three-state transducer driving word buffering and sentence punctuation
//!
//! The transducer consumes one character at a time. Printable characters are
//! buffered into a word; the word is rewritten through the correction table
//! and released only when a space, newline or sentence terminator closes it.
//! Terminators are always followed by a fixed amount of padding, however the
//! source spaced its sentences.

use crate::classify::{classify, fold, CharClass};
use crate::config::defaults;
use crate::corrections::CorrectionTable;

/// Transducer state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum State {
    /// Inside a word; the buffer is non-empty
    Word,
    /// Between words after whitespace
    Deadspace,
    /// A terminator was emitted; the next word is capitalized
    #[default]
    EndOfSentence,
}

/// Counters collected while transducing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransducerStats {
    /// Words flushed through the rewriter
    pub words: usize,
    /// Words replaced by a correction table entry
    pub corrections: usize,
    /// Terminators emitted
    pub sentences: usize,
}

/// Character-at-a-time transducer.
///
/// One instance belongs to one stream; it is not meant to be shared between
/// runs.
#[derive(Debug)]
pub struct Transducer<'t> {
    state: State,
    buffer: String,
    table: Option<&'t CorrectionTable>,
    padding: usize,
    stats: TransducerStats,
}

impl<'t> Transducer<'t> {
    /// Create a transducer in the initial `EndOfSentence` state
    pub fn new(table: &'t CorrectionTable) -> Self {
        Self::with_padding(table, defaults::SENTENCE_PADDING)
    }

    /// Create a transducer emitting `padding` spaces after each terminator
    pub fn with_padding(table: &'t CorrectionTable, padding: usize) -> Self {
        Self {
            state: State::default(),
            buffer: String::new(),
            table: Some(table),
            padding,
            stats: TransducerStats::default(),
        }
    }

    /// Create a transducer that releases words exactly as buffered
    pub fn without_corrections(padding: usize) -> Transducer<'static> {
        Transducer {
            state: State::default(),
            buffer: String::new(),
            table: None,
            padding,
            stats: TransducerStats::default(),
        }
    }

    /// Current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Whether a word is being buffered
    pub fn is_mid_word(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// The word buffered so far, before rewriting
    pub fn pending_word(&self) -> &str {
        &self.buffer
    }

    /// Counters so far
    pub fn stats(&self) -> TransducerStats {
        self.stats
    }

    /// Consume one character, returning the text to emit, if any
    pub fn step(&mut self, ch: char) -> Option<String> {
        let class = classify(ch);
        let ch = fold(ch);

        match (self.state, class) {
            (_, CharClass::Other) => None,

            (State::Word, CharClass::SentenceTerminator) => {
                let mut out = self.flush_word();
                self.push_terminator(&mut out, ch);
                self.state = State::EndOfSentence;
                Some(out)
            }
            (State::Word, CharClass::Whitespace) => {
                let mut out = self.flush_word();
                out.push(' ');
                self.state = State::Deadspace;
                Some(out)
            }
            (State::Word, CharClass::Printable) => {
                self.buffer.push(ch);
                None
            }

            (State::Deadspace, CharClass::Whitespace) => None,
            (State::Deadspace, CharClass::SentenceTerminator) => {
                let mut out = String::with_capacity(self.padding.saturating_add(1));
                self.push_terminator(&mut out, ch);
                self.state = State::EndOfSentence;
                Some(out)
            }
            (State::Deadspace, CharClass::Printable) => {
                self.buffer.clear();
                self.buffer.push(ch);
                self.state = State::Word;
                None
            }

            (State::EndOfSentence, CharClass::Whitespace | CharClass::SentenceTerminator) => None,
            (State::EndOfSentence, CharClass::Printable) => {
                self.buffer.push(ch.to_ascii_uppercase());
                self.state = State::Word;
                None
            }
        }
    }

    /// Rewrite and release a buffered word.
    ///
    /// Only the stream driver calls this, once input is exhausted. Returns
    /// `None` when nothing is buffered.
    pub fn flush(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            return None;
        }
        Some(self.flush_word())
    }

    fn flush_word(&mut self) -> String {
        let (word, corrected) = match self.table {
            Some(table) => {
                let rewritten = table.rewrite_counted(&self.buffer);
                self.buffer.clear();
                rewritten
            }
            None => (std::mem::take(&mut self.buffer), false),
        };
        self.stats.words += 1;
        if corrected {
            self.stats.corrections += 1;
        }
        word
    }

    fn push_terminator(&mut self, out: &mut String, terminator: char) {
        out.push(terminator);
        out.extend(std::iter::repeat(' ').take(self.padding));
        self.stats.sentences += 1;
    }
}
