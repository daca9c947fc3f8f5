//! Input normalization.
//!
//! Everything that is not alphabetic (`char::is_alphabetic`) is dropped. Case
//! is preserved so diagnostics can echo what the user typed; case-folding
//! happens at match time via [`crate::symbol::canonical`].

use std::fmt;

/// Alphabetic-only text, indexed by character position.
///
/// Positions run `0..=len()`; `bounds[p]` is the byte offset of position `p`,
/// so slicing by position never splits a multi-byte character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedText {
    text: String,
    bounds: Vec<usize>,
}

impl NormalizedText {
    /// Strip every non-alphabetic character from `raw`.
    pub fn normalize(raw: &str) -> Self {
        let text: String = raw.chars().filter(|c| c.is_alphabetic()).collect();
        let mut bounds: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        bounds.push(text.len());
        Self { text, bounds }
    }

    /// Number of characters (positions are `0..=len`).
    #[inline]
    pub fn len(&self) -> usize {
        self.bounds.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Characters in positions `[start, end)`.
    ///
    /// # Panics
    /// Panics if `start > end` or `end > len()`.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &str {
        &self.text[self.bounds[start]..self.bounds[end]]
    }

    /// Characters from position `start` to the end.
    #[inline]
    pub fn suffix(&self, start: usize) -> &str {
        &self.text[self.bounds[start]..]
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_whitespace_digits_and_punctuation() {
        let t = NormalizedText::normalize("  Geoff-rey 42!\n");
        assert_eq!(t.as_str(), "Geoffrey");
        assert_eq!(t.len(), 8);
    }

    #[test]
    fn empty_and_all_junk_inputs_are_empty() {
        assert!(NormalizedText::normalize("").is_empty());
        let junk = NormalizedText::normalize("123 ?!");
        assert!(junk.is_empty());
        assert_eq!(junk.len(), 0);
        assert_eq!(junk.suffix(0), "");
    }

    #[test]
    fn slicing_is_by_character_position() {
        let t = NormalizedText::normalize("aébc");
        assert_eq!(t.len(), 4);
        assert_eq!(t.slice(1, 3), "éb");
        assert_eq!(t.suffix(2), "bc");
        assert_eq!(t.slice(4, 4), "");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(raw in "\\PC{0,24}") {
            let once = NormalizedText::normalize(&raw);
            let twice = NormalizedText::normalize(once.as_str());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn output_is_alphabetic_only(raw in "[a-zA-Z0-9 ,.!-]{0,32}") {
            let t = NormalizedText::normalize(&raw);
            prop_assert!(t.as_str().chars().all(char::is_alphabetic));
            prop_assert_eq!(t.len(), t.as_str().chars().count());
        }
    }
}
