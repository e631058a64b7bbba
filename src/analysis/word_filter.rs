//! Word filters that keep non-errors out of spell-check reports.
//!
//! A filter is any predicate `Fn(&str) -> bool` returning `true` when the
//! word must be excluded. Filters are grouped into a [`FilterChain`] per
//! [`FilterStage`]:
//!
//! - **pre** filters run on words as written, before dictionary lookup;
//!   excluded words are never looked up nor reported.
//! - **post** filters run on the words the dictionary reported as unknown,
//!   still as written, so case-sensitive filters work in either stage.
//!
//! A chain excludes a word if any of its filters does, so the order of
//! filters inside a chain never changes the result.
//!
//! # Examples
//!
//! ```
//! use oboscan::analysis::word_filter::{all_uppercase, shorter_than, FilterChain};
//!
//! let mut chain = FilterChain::new();
//! chain.push(all_uppercase);
//! chain.push(shorter_than(4));
//!
//! assert!(chain.excludes("DNA"));
//! assert!(chain.excludes("cel"));
//! assert!(!chain.excludes("mitocondrial"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A boxed word predicate; `true` means "exclude this word".
pub type WordFilter = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// When a filter is applied relative to dictionary lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterStage {
    Pre,
    Post,
}

/// An ordered list of filters combined with logical OR.
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<WordFilter>,
}

impl FilterChain {
    pub fn new() -> Self {
        FilterChain::default()
    }

    /// Append a filter to the chain.
    pub fn push<F>(&mut self, filter: F)
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.filters.push(Box::new(filter));
    }

    /// Whether any filter excludes `word`. Stops at the first match.
    pub fn excludes(&self, word: &str) -> bool {
        self.filters.iter().any(|filter| filter(word))
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterChain")
            .field("filters", &self.filters.len())
            .finish()
    }
}

/// Excludes words containing anything but letters (digits, apostrophes...).
pub fn non_alphabetic(word: &str) -> bool {
    !word.chars().all(char::is_alphabetic)
}

/// Excludes acronyms: words with at least one uppercase letter and no
/// lowercase letter.
pub fn all_uppercase(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

/// Excludes camel-case identifiers: a lowercase first character followed by
/// a remainder that is not entirely lowercase, as in "mRNA", "tRNAscan" or
/// "p53". Single letters are never excluded.
pub fn camel_case(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => {
            let rest = chars.as_str();
            !rest.is_empty() && !rest.chars().all(char::is_lowercase)
        }
        _ => false,
    }
}

/// Build a filter excluding words with fewer than `threshold` characters.
pub fn shorter_than(threshold: usize) -> impl Fn(&str) -> bool + Send + Sync + Clone + 'static {
    move |word: &str| word.chars().count() < threshold
}

/// Named filters, for selecting filters from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordFilterKind {
    /// See [`non_alphabetic`]
    NonAlphabetic,
    /// See [`all_uppercase`]
    Uppercase,
    /// See [`camel_case`]
    CamelCase,
    /// See [`shorter_than`]; uses the configured minimum word length
    Short,
}

impl WordFilterKind {
    /// Turn the named filter into a predicate.
    pub fn build(self, min_word_length: usize) -> WordFilter {
        match self {
            WordFilterKind::NonAlphabetic => Box::new(non_alphabetic),
            WordFilterKind::Uppercase => Box::new(all_uppercase),
            WordFilterKind::CamelCase => Box::new(camel_case),
            WordFilterKind::Short => Box::new(shorter_than(min_word_length)),
        }
    }
}
