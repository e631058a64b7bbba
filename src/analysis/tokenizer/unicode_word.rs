//! Unicode word tokenizer implementation.
//!
//! Splits text using Unicode word boundary rules (UAX #29) and keeps only the
//! segments that contain a letter or digit, dropping whitespace and
//! punctuation.

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::tokenizer::Tokenizer;

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Hyphenated compounds are split into their parts ("DNA-binding" yields
/// "DNA" and "binding"), while apostrophes and digits inside a word are kept
/// ("cell's", "p53").
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.unicode_words().collect()
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
