//! Fixed-width line wrapping

use crate::config::defaults;

/// Tracks the emitted column and decides where line breaks go.
///
/// Breaks are only ever taken between words, so the caller passes in
/// whether a word is still being buffered.
#[derive(Debug, Clone)]
pub struct LineWrapper {
    width: usize,
    column: usize,
}

impl Default for LineWrapper {
    fn default() -> Self {
        Self::new(defaults::WRAP_WIDTH)
    }
}

impl LineWrapper {
    /// Create a wrapper breaking once the column exceeds `width`
    pub fn new(width: usize) -> Self {
        Self { width, column: 0 }
    }

    /// Account for emitted text
    pub fn record(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
    }

    /// Whether a break belongs here
    pub fn should_break(&self, mid_word: bool) -> bool {
        !mid_word && self.column > self.width
    }

    /// Reset the column after a break has been written
    pub fn break_line(&mut self) {
        self.column = 0;
    }
}

/// Wrap already-translated text.
///
/// This pass has no word buffer to consult: every character is copied, and a
/// newline goes in right after the first space, `?` or `!` found past the
/// threshold column.
pub fn rewrap_translated(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / width.max(1) + 1);
    let mut column = 0usize;

    for ch in text.chars() {
        out.push(ch);
        if ch == '\n' {
            column = 0;
            continue;
        }
        column += 1;
        if column > width && matches!(ch, ' ' | '?' | '!') {
            out.push('\n');
            column = 0;
        }
    }

    out
}
