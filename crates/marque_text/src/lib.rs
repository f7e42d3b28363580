//! Marque Text Splitting
//!
//! Staggered headline reveals animate one fragment at a time. This crate
//! turns a string into those fragments: individual characters for
//! letter-by-letter cascades, or whitespace-delimited words.
//!
//! # Example
//!
//! ```rust
//! use marque_text::{split_text, SplitMode};
//!
//! let chars = split_text("GT", SplitMode::Character);
//! assert_eq!(chars, vec!["G", "T"]);
//!
//! let words = split_text("  pure  performance ", SplitMode::Word);
//! assert_eq!(words, vec!["pure", "performance"]);
//! ```

use serde::{Deserialize, Serialize};

/// Granularity of a staggered text reveal
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    #[default]
    Character,
    Word,
}

/// Split text into reveal fragments
pub fn split_text(text: &str, mode: SplitMode) -> Vec<String> {
    match mode {
        SplitMode::Character => split_characters(text),
        SplitMode::Word => split_words(text),
    }
}

/// One fragment per character
///
/// The empty string yields a single empty fragment, not an empty vector.
/// Downstream reveal code relies on this: an empty headline still renders
/// one (invisible) span.
pub fn split_characters(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }
    text.chars().map(String::from).collect()
}

/// Whitespace-delimited words, empty tokens discarded
///
/// Whitespace-only input yields an empty vector.
pub fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_cardinality() {
        for input in ["a", "GT", "Meridian", "grand tourer", "  spaced  "] {
            let fragments = split_characters(input);
            assert_eq!(fragments.len(), input.chars().count(), "for {input:?}");
            assert_eq!(fragments.concat(), input);
        }
    }

    #[test]
    fn test_character_empty_string_quirk() {
        // Splitting "" produces one empty fragment; kept as documented
        // behavior, matching the rest of the reveal pipeline.
        assert_eq!(split_characters(""), vec![String::new()]);
        assert_eq!(split_text("", SplitMode::Character).len(), 1);
    }

    #[test]
    fn test_word_split_discards_empty_tokens() {
        assert_eq!(split_words("pure performance"), vec!["pure", "performance"]);
        assert_eq!(
            split_words("  twin\tturbo \n v12  "),
            vec!["twin", "turbo", "v12"]
        );
    }

    #[test]
    fn test_word_split_whitespace_only_is_empty() {
        assert!(split_words("").is_empty());
        assert!(split_words("   \t\n  ").is_empty());
    }

    #[test]
    fn test_word_cardinality() {
        for (input, expected) in [
            ("one", 1),
            ("grand touring coupe", 3),
            ("  leading and trailing  ", 3),
            ("\n", 0),
        ] {
            assert_eq!(
                split_text(input, SplitMode::Word).len(),
                expected,
                "for {input:?}"
            );
        }
    }
}
