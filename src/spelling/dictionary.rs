//! Dictionary management for spell-checking.
//!
//! [`SpellingDictionary`] is a word-frequency model: every word with a
//! non-zero frequency is "known". The model only grows; merging additional
//! corpora never removes a word. Additional corpora come from a
//! [`DictionarySource`], which may be a file, standard input or the output
//! of a shell command.

use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;
use std::fs::{self, File};
use std::hash::{Hash, Hasher};
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::str::FromStr;

use log::{debug, warn};

use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::error::{OboscanError, Result};

/// A dictionary that stores words and their frequencies.
#[derive(Debug, Clone, Default)]
pub struct SpellingDictionary {
    /// Lowercased words and their frequencies
    words: HashMap<String, u64>,
    /// Total word count
    total_count: u64,
    /// Content hashes of the corpora merged so far
    merged_corpora: HashSet<u64>,
}

impl SpellingDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        SpellingDictionary::default()
    }

    /// Add a word to the dictionary with the given frequency.
    pub fn add_word(&mut self, word: &str, frequency: u64) {
        let normalized = word.to_lowercase();
        let old_freq = self.words.insert(normalized, frequency).unwrap_or(0);
        self.total_count = self
            .total_count
            .saturating_sub(old_freq)
            .saturating_add(frequency);
    }

    /// Increment the frequency of a word by 1.
    pub fn increment_word(&mut self, word: &str) {
        let current = self.frequency(word);
        self.add_word(word, current.saturating_add(1));
    }

    /// Check if a word exists in the dictionary (case-insensitive).
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&word.to_lowercase())
    }

    /// Get the frequency of a word.
    pub fn frequency(&self, word: &str) -> u64 {
        self.words.get(&word.to_lowercase()).copied().unwrap_or(0)
    }

    /// Get the total number of unique words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Get the total frequency count.
    pub fn total_frequency(&self) -> u64 {
        self.total_count
    }

    /// Return the lowercased forms of the words that are not in the
    /// dictionary, deduplicated and sorted.
    pub fn unknown<'a, I>(&self, words: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        words
            .into_iter()
            .map(str::to_lowercase)
            .filter(|word| !self.words.contains_key(word))
            .collect()
    }

    /// Merge the words of a free-text corpus into the dictionary.
    ///
    /// The text is split into words the same way term fields are, and every
    /// word is counted, so any word of the corpus is known afterwards.
    /// Merging a corpus whose content was already merged changes nothing and
    /// returns `false`.
    pub fn merge_corpus(&mut self, text: &str) -> bool {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        if !self.merged_corpora.insert(hasher.finish()) {
            return false;
        }

        let tokenizer = UnicodeWordTokenizer::new();
        for word in tokenizer.tokenize(text) {
            self.increment_word(word);
        }
        true
    }

    /// Merge another dictionary into this one.
    pub fn merge(&mut self, other: &SpellingDictionary) {
        for (word, frequency) in &other.words {
            let current = self.frequency(word);
            self.add_word(word, current.saturating_add(*frequency));
        }
    }

    /// Load a dictionary from a frequency file with format "word frequency"
    /// per line. Malformed lines are skipped with a warning.
    pub fn load_frequency_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| OboscanError::dictionary(format!("{}: {}", path.display(), e)))?;
        let reader = BufReader::new(file);

        let mut dictionary = SpellingDictionary::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if !dictionary.add_frequency_line(&line) {
                warn!(
                    "{}: line {}: expected 'word frequency', got '{}'",
                    path.display(),
                    index + 1,
                    line
                );
            }
        }

        Ok(dictionary)
    }

    /// Build a dictionary from "word frequency" lines held in memory.
    /// Malformed lines are skipped.
    pub fn from_frequency_text(text: &str) -> Self {
        let mut dictionary = SpellingDictionary::new();
        for line in text.lines() {
            dictionary.add_frequency_line(line);
        }
        dictionary
    }

    /// Add one "word frequency" line. Blank lines are accepted and add
    /// nothing; returns `false` for a malformed line.
    fn add_frequency_line(&mut self, line: &str) -> bool {
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (None, _, _) => true,
            (Some(word), Some(frequency), None) => match frequency.parse::<u64>() {
                Ok(frequency) => {
                    let current = self.frequency(word);
                    self.add_word(word, current.saturating_add(frequency));
                    true
                }
                Err(_) => false,
            },
            _ => false,
        }
    }
}

/// The baseline English word list shipped with the crate.
pub struct BuiltinDictionary;

impl BuiltinDictionary {
    /// Create a dictionary of general English vocabulary, inflected forms
    /// included.
    pub fn english() -> SpellingDictionary {
        SpellingDictionary::from_frequency_text(include_str!("english.txt"))
    }
}

/// Where an additional dictionary corpus is read from.
///
/// Parsed from a command-line string: `-` is standard input, `|command`
/// runs `command` through `sh -c` and reads its standard output, anything
/// else is a file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    File(PathBuf),
    Stdin,
    Command(String),
}

impl FromStr for DictionarySource {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s == "-" {
            Ok(DictionarySource::Stdin)
        } else if let Some(command) = s.strip_prefix('|') {
            let command = command.trim();
            if command.is_empty() {
                return Err("empty dictionary command".to_string());
            }
            Ok(DictionarySource::Command(command.to_string()))
        } else if s.is_empty() {
            Err("empty dictionary path".to_string())
        } else {
            Ok(DictionarySource::File(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for DictionarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionarySource::File(path) => write!(f, "{}", path.display()),
            DictionarySource::Stdin => f.write_str("<stdin>"),
            DictionarySource::Command(command) => write!(f, "|{command}"),
        }
    }
}

impl DictionarySource {
    /// Read the whole corpus.
    pub fn read(&self) -> Result<String> {
        match self {
            DictionarySource::File(path) => fs::read_to_string(path)
                .map_err(|e| OboscanError::dictionary(format!("{}: {}", path.display(), e))),
            DictionarySource::Stdin => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|e| OboscanError::dictionary(format!("<stdin>: {e}")))?;
                Ok(text)
            }
            DictionarySource::Command(command) => {
                debug!("Running dictionary command: {command}");
                let output = Command::new("sh")
                    .arg("-c")
                    .arg(command)
                    .output()
                    .map_err(|e| OboscanError::dictionary(format!("'{command}': {e}")))?;
                if !output.status.success() {
                    return Err(OboscanError::dictionary(format!(
                        "'{}' failed ({}): {}",
                        command,
                        output.status,
                        String::from_utf8_lossy(&output.stderr).trim()
                    )));
                }
                Ok(String::from_utf8_lossy(&output.stdout).into_owned())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_dictionary_basic_operations() {
        let mut dict = SpellingDictionary::new();

        assert!(!dict.contains("neuron"));
        assert_eq!(dict.frequency("neuron"), 0);
        assert_eq!(dict.word_count(), 0);

        dict.add_word("neuron", 5);
        assert!(dict.contains("neuron"));
        assert_eq!(dict.frequency("neuron"), 5);
        assert_eq!(dict.total_frequency(), 5);

        dict.increment_word("neuron");
        assert_eq!(dict.frequency("neuron"), 6);
        assert_eq!(dict.total_frequency(), 6);

        dict.add_word("axon", 3);
        assert_eq!(dict.word_count(), 2);
        assert_eq!(dict.total_frequency(), 9);
    }

    #[test]
    fn test_dictionary_case_insensitive() {
        let mut dict = SpellingDictionary::new();

        dict.add_word("Neuron", 5);
        assert!(dict.contains("neuron"));
        assert!(dict.contains("NEURON"));

        dict.increment_word("NEURON");
        assert_eq!(dict.frequency("neuron"), 6);
    }

    #[test]
    fn test_unknown_is_lowercased_and_sorted() {
        let mut dict = SpellingDictionary::new();
        dict.add_word("transport", 1);

        let unknown = dict.unknown(["Mitocondrial", "transport", "axon", "mitocondrial"]);
        assert_eq!(
            unknown.into_iter().collect::<Vec<_>>(),
            vec!["axon".to_string(), "mitocondrial".to_string()]
        );
    }

    #[test]
    fn test_merge_corpus() {
        let mut dict = SpellingDictionary::new();
        assert!(dict.merge_corpus("Ommatidium ommatidia, ommatidium! p53 rhabdomere"));

        assert_eq!(dict.frequency("ommatidium"), 2);
        assert!(dict.contains("ommatidia"));
        assert!(dict.contains("rhabdomere"));
        assert!(dict.contains("p53"));
        assert!(dict.unknown(["Ommatidium"]).is_empty());
    }

    #[test]
    fn test_merge_corpus_keeps_non_alphabetic_words() {
        let mut dict = SpellingDictionary::new();
        dict.merge_corpus("p53 cell's X11");

        assert!(dict.unknown(["p53", "cell's", "x11", "X11"]).is_empty());
    }

    #[test]
    fn test_merge_corpus_is_idempotent() {
        let mut dict = SpellingDictionary::new();
        let corpus = "imaginal disc\nimaginal";

        assert!(dict.merge_corpus(corpus));
        let count = dict.word_count();
        let total = dict.total_frequency();

        assert!(!dict.merge_corpus(corpus));
        assert_eq!(dict.word_count(), count);
        assert_eq!(dict.total_frequency(), total);
        assert_eq!(dict.frequency("imaginal"), 2);
    }

    #[test]
    fn test_merge_dictionaries() {
        let mut dict1 = SpellingDictionary::new();
        dict1.add_word("neuron", 5);
        dict1.add_word("glia", 3);

        let mut dict2 = SpellingDictionary::new();
        dict2.add_word("neuron", 2);
        dict2.add_word("axon", 4);

        dict1.merge(&dict2);

        assert_eq!(dict1.frequency("neuron"), 7);
        assert_eq!(dict1.frequency("glia"), 3);
        assert_eq!(dict1.frequency("axon"), 4);
        assert_eq!(dict1.word_count(), 3);
    }

    #[test]
    fn test_load_frequency_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "neuron 5").unwrap();
        writeln!(temp_file, "axon 3").unwrap();
        writeln!(temp_file, "p53 9").unwrap();
        writeln!(temp_file).unwrap();
        writeln!(temp_file, "malformed").unwrap();
        writeln!(temp_file, "axon three").unwrap();
        temp_file.flush().unwrap();

        let dict = SpellingDictionary::load_frequency_file(temp_file.path()).unwrap();
        assert_eq!(dict.frequency("neuron"), 5);
        assert_eq!(dict.frequency("axon"), 3);
        assert_eq!(dict.frequency("p53"), 9);
        assert_eq!(dict.word_count(), 3);
    }

    #[test]
    fn test_load_frequency_file_with_large_counts() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "the 23135851162").unwrap();
        writeln!(temp_file, "of 13151942776").unwrap();
        temp_file.flush().unwrap();

        let dict = SpellingDictionary::load_frequency_file(temp_file.path()).unwrap();
        assert_eq!(dict.word_count(), 2);
        assert_eq!(dict.frequency("the"), 23_135_851_162);
        assert_eq!(dict.total_frequency(), 23_135_851_162 + 13_151_942_776);
    }

    #[test]
    fn test_frequencies_saturate() {
        let mut dict = SpellingDictionary::new();
        dict.add_word("the", u64::MAX - 1);
        dict.increment_word("the");
        dict.increment_word("the");
        assert_eq!(dict.frequency("the"), u64::MAX);

        let mut other = SpellingDictionary::new();
        other.add_word("the", 4_294_967_295);
        other.add_word("of", 7);
        dict.merge(&other);
        assert_eq!(dict.frequency("the"), u64::MAX);
        assert_eq!(dict.frequency("of"), 7);
        assert_eq!(dict.total_frequency(), u64::MAX);
    }

    #[test]
    fn test_merge_into_builtin_at_u32_limit() {
        let mut english = BuiltinDictionary::english();
        english.merge(&SpellingDictionary::from_frequency_text("the 4294967295\n"));
        assert_eq!(english.frequency("the"), 4_294_967_296);
    }

    #[test]
    fn test_builtin_dictionary() {
        let english = BuiltinDictionary::english();
        assert!(english.contains("the"));
        assert!(english.contains("transport"));
        assert!(!english.contains("mitocondrial"));
        assert!(english.word_count() > 100_000);
    }

    #[test]
    fn test_builtin_dictionary_knows_biomedical_english() {
        let english = BuiltinDictionary::english();
        let unknown = english.unknown([
            "transmits",
            "impulses",
            "binding",
            "anterior",
            "receptor",
            "activity",
            "regulation",
            "positive",
            "negative",
            "mitochondrion",
            "membrane",
            "neuron",
        ]);
        assert!(unknown.is_empty(), "unexpected unknown words: {unknown:?}");
    }

    #[test]
    fn test_dictionary_source_parsing() {
        assert_eq!("-".parse::<DictionarySource>(), Ok(DictionarySource::Stdin));
        assert_eq!(
            "|aspell dump master".parse::<DictionarySource>(),
            Ok(DictionarySource::Command("aspell dump master".to_string()))
        );
        assert_eq!(
            "words.txt".parse::<DictionarySource>(),
            Ok(DictionarySource::File(PathBuf::from("words.txt")))
        );
        assert!("|  ".parse::<DictionarySource>().is_err());
    }

    #[test]
    fn test_read_file_source() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "rhabdomere").unwrap();
        temp_file.flush().unwrap();

        let source = DictionarySource::File(temp_file.path().to_path_buf());
        assert_eq!(source.read().unwrap(), "rhabdomere");
    }

    #[test]
    fn test_missing_file_source() {
        let source = DictionarySource::File(PathBuf::from("/nonexistent/words.txt"));
        let err = source.read().unwrap_err();
        assert!(matches!(err, OboscanError::Dictionary(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_command_source() {
        let source: DictionarySource = "|echo rhabdomere ommatidium".parse().unwrap();
        assert_eq!(source.read().unwrap().trim(), "rhabdomere ommatidium");

        let failing: DictionarySource = "|exit 3".parse().unwrap();
        let err = failing.read().unwrap_err();
        assert!(matches!(err, OboscanError::Dictionary(_)));
    }
}
