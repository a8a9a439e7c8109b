//! Word rewriting against the correction table

use crate::corrections::CorrectionTable;

impl CorrectionTable {
    /// Rewrite a single buffered word.
    ///
    /// The word is lowercased and replaced by the first matching entry, if
    /// any. When the original started with an uppercase ASCII letter, the
    /// first character of the result is forced to uppercase; the rest of the
    /// result is left as the table or the lowercased word has it.
    ///
    /// ```
    /// use retype_core::CorrectionTable;
    ///
    /// let table = CorrectionTable::default();
    /// assert_eq!(table.rewrite("Cant"), "Cant");
    /// assert_eq!(table.rewrite("Can't"), "Cannot");
    /// assert_eq!(table.rewrite("im"), "I am");
    /// ```
    pub fn rewrite(&self, word: &str) -> String {
        self.rewrite_counted(word).0
    }

    /// Same as [`rewrite`](Self::rewrite), also reporting whether a table
    /// entry matched
    pub(crate) fn rewrite_counted(&self, word: &str) -> (String, bool) {
        let Some(first) = word.chars().next() else {
            return (String::new(), false);
        };
        let capitalized = first.is_ascii_uppercase();

        let folded = word.to_ascii_lowercase();
        let (mut rewritten, corrected) = match self.lookup(&folded) {
            Some(replacement) => (replacement.to_string(), true),
            None => (folded, false),
        };

        if capitalized {
            capitalize_first(&mut rewritten);
        }

        (rewritten, corrected)
    }
}

fn capitalize_first(word: &mut String) {
    if let Some(first) = word.get_mut(..1) {
        first.make_ascii_uppercase();
    }
}
