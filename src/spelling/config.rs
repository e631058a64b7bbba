//! Configuration for the spell-check pipeline.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::word_filter::WordFilterKind;
use crate::error::{OboscanError, Result};

/// Configuration for [`OntoChecker`](crate::spelling::checker::OntoChecker).
///
/// Every field has a default, so a JSON configuration file only needs the
/// values it overrides:
///
/// ```
/// use oboscan::spelling::config::CheckerConfig;
///
/// let config: CheckerConfig = serde_json::from_str(r#"{"min_word_length": 3}"#).unwrap();
/// assert_eq!(config.min_word_length, 3);
/// assert!(config.builtin_dictionary);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Unknown words shorter than this are not reported (`short` filter).
    pub min_word_length: usize,

    /// Filters applied before dictionary lookup.
    pub pre_filters: Vec<WordFilterKind>,

    /// Filters applied to the words found unknown.
    pub post_filters: Vec<WordFilterKind>,

    /// Whether obsolete terms are checked.
    pub include_obsolete: bool,

    /// Check terms on the rayon thread pool.
    pub parallel: bool,

    /// Seed the dictionary with the built-in English word list.
    pub builtin_dictionary: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            min_word_length: 4,
            pre_filters: vec![
                WordFilterKind::NonAlphabetic,
                WordFilterKind::Uppercase,
                WordFilterKind::CamelCase,
            ],
            post_filters: vec![WordFilterKind::Short],
            include_obsolete: false,
            parallel: false,
            builtin_dictionary: true,
        }
    }
}

impl CheckerConfig {
    /// Read a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| OboscanError::invalid_config(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&text)
            .map_err(|e| OboscanError::invalid_config(format!("{}: {}", path.display(), e)))
    }
}
