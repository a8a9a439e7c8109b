//! Character classification for the transducer

/// Classification of a single input character
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// Sentence-ending punctuation: `.`, `!`, `?`
    SentenceTerminator,
    /// Space or newline
    Whitespace,
    /// Letters and ASCII symbols that become part of a word
    Printable,
    /// Everything else; absorbed without effect
    Other,
}

/// ASCII case-fold applied before classification.
///
/// Characters outside the ASCII range are returned unchanged.
#[inline]
pub fn fold(ch: char) -> char {
    ch.to_ascii_lowercase()
}

/// Classify a character.
///
/// Terminators are tested first since `.` and `?` also sit inside the
/// printable symbol range.
pub fn classify(ch: char) -> CharClass {
    let ch = fold(ch);
    match ch {
        '.' | '!' | '?' => CharClass::SentenceTerminator,
        ' ' | '\n' => CharClass::Whitespace,
        _ => match u32::from(ch) {
            97..=122 | 34..=64 | 91..=96 | 123..=126 => CharClass::Printable,
            _ => CharClass::Other,
        },
    }
}
