//! Tokenizers that split free text into candidate words.
//!
//! Tokenization is the first step of the spell-check pipeline. Tokenizers
//! preserve the original case of each word: case-sensitive filters such as
//! the acronym and camel-case filters run on the words as written, before
//! the dictionary normalises them.
//!
//! # Examples
//!
//! ```
//! use oboscan::analysis::tokenizer::Tokenizer;
//! use oboscan::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let words = tokenizer.tokenize("Mitocondrial transport");
//! assert_eq!(words, vec!["Mitocondrial", "transport"]);
//! ```

/// Trait for tokenizers that split text into words.
///
/// Tokenization never fails: any string yields a (possibly empty) list of
/// words borrowed from the input. The trait requires `Send + Sync` so a
/// checker can be shared across worker threads.
pub trait Tokenizer: Send + Sync {
    /// Split `text` into words, in order of appearance.
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Get the name of this tokenizer (for logging).
    fn name(&self) -> &'static str;
}

pub mod unicode_word;
