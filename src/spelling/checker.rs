//! The ontology spell-check pipeline.
//!
//! For each text field of a term the checker runs:
//!
//! ```text
//! field text → Tokenizer → pre filters → dictionary lookup → post filters → report
//! ```
//!
//! Synonyms go through the same steps one by one and their unknown words are
//! aggregated under a single `synonyms` entry.
//!
//! # Examples
//!
//! ```
//! use oboscan::analysis::word_filter::{all_uppercase, shorter_than, FilterStage};
//! use oboscan::ontology::term::Term;
//! use oboscan::spelling::checker::OntoChecker;
//! use oboscan::spelling::dictionary::BuiltinDictionary;
//! use oboscan::spelling::report::TermField;
//!
//! let mut checker = OntoChecker::new(BuiltinDictionary::english());
//! checker.add_filter(all_uppercase, FilterStage::Pre);
//! checker.add_filter(shorter_than(4), FilterStage::Post);
//!
//! let term = Term::new("GO:0000001").with_name("Mitocondrial DNA transport");
//! let report = checker.check_term(&term).unwrap();
//!
//! let words: Vec<&String> = report.get(TermField::Name).unwrap().iter().collect();
//! assert_eq!(words, vec!["mitocondrial"]);
//! ```

use std::collections::BTreeSet;
use std::sync::Arc;

use log::{debug, info};
use rayon::prelude::*;

use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::analysis::word_filter::{FilterChain, FilterStage};
use crate::error::Result;
use crate::ontology::Ontology;
use crate::ontology::term::Term;
use crate::spelling::config::CheckerConfig;
use crate::spelling::dictionary::{BuiltinDictionary, DictionarySource, SpellingDictionary};
use crate::spelling::report::{CheckReport, TermField, TermReport};

/// Spell-checker for ontology terms.
///
/// The checker owns its dictionary; once built it is only read, so a
/// checker can be shared between threads to check terms concurrently.
pub struct OntoChecker {
    dictionary: SpellingDictionary,
    tokenizer: Arc<dyn Tokenizer>,
    pre_filters: FilterChain,
    post_filters: FilterChain,
    include_obsolete: bool,
    parallel: bool,
}

impl OntoChecker {
    /// Create a checker over `dictionary`, with no filters.
    pub fn new(dictionary: SpellingDictionary) -> Self {
        OntoChecker {
            dictionary,
            tokenizer: Arc::new(UnicodeWordTokenizer::new()),
            pre_filters: FilterChain::new(),
            post_filters: FilterChain::new(),
            include_obsolete: false,
            parallel: false,
        }
    }

    /// Create a checker with the filters and options of `config`.
    pub fn from_config(config: &CheckerConfig) -> Self {
        let dictionary = if config.builtin_dictionary {
            BuiltinDictionary::english()
        } else {
            SpellingDictionary::new()
        };

        let mut checker = OntoChecker::new(dictionary)
            .include_obsolete(config.include_obsolete)
            .parallel(config.parallel);
        for kind in &config.pre_filters {
            checker.add_filter(kind.build(config.min_word_length), FilterStage::Pre);
        }
        for kind in &config.post_filters {
            checker.add_filter(kind.build(config.min_word_length), FilterStage::Post);
        }
        checker
    }

    /// Replace the tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Check obsolete terms too (they are skipped by default).
    pub fn include_obsolete(mut self, include: bool) -> Self {
        self.include_obsolete = include;
        self
    }

    /// Check terms on the rayon thread pool in [`check_ontology`](Self::check_ontology).
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Merge additional known-word corpora into the dictionary.
    ///
    /// Returns how many corpora were merged; a corpus identical to one
    /// already merged is skipped.
    pub fn configure<I, S>(&mut self, corpora: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut merged = 0;
        for corpus in corpora {
            if self.dictionary.merge_corpus(corpus.as_ref()) {
                merged += 1;
            } else {
                debug!("Skipping a dictionary corpus that was already merged");
            }
        }
        merged
    }

    /// Read a dictionary source and merge it into the dictionary.
    pub fn add_custom_dictionary(&mut self, source: &DictionarySource) -> Result<()> {
        let corpus = source.read()?;
        let before = self.dictionary.word_count();
        self.configure([corpus]);
        debug!(
            "Merged dictionary {}: {} new words",
            source,
            self.dictionary.word_count() - before
        );
        Ok(())
    }

    /// Merge a word-frequency dictionary into the dictionary.
    pub fn add_dictionary(&mut self, dictionary: &SpellingDictionary) {
        self.dictionary.merge(dictionary);
    }

    /// Append a filter to the chain of the given stage.
    pub fn add_filter<F>(&mut self, filter: F, stage: FilterStage)
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        match stage {
            FilterStage::Pre => self.pre_filters.push(filter),
            FilterStage::Post => self.post_filters.push(filter),
        }
    }

    pub fn dictionary(&self) -> &SpellingDictionary {
        &self.dictionary
    }

    /// Unknown words of a piece of text, lowercased and sorted.
    ///
    /// Both filter stages see words as written; only reported words are
    /// lowercased.
    pub fn check_value(&self, value: &str) -> BTreeSet<String> {
        self.tokenizer
            .tokenize(value)
            .into_iter()
            .filter(|word| !self.pre_filters.excludes(word))
            .filter(|word| !self.dictionary.contains(word))
            .filter(|word| !self.post_filters.excludes(word))
            .map(str::to_lowercase)
            .collect()
    }

    /// Check all text fields and synonyms of a term.
    ///
    /// Returns `None` when no field has unknown words.
    pub fn check_term(&self, term: &Term) -> Option<CheckReport> {
        let mut report = CheckReport::new();

        for field in TermField::TEXT_FIELDS {
            if let Some(value) = field.value(term) {
                report.insert(field, self.check_value(value));
            }
        }

        let synonym_words: BTreeSet<String> = term
            .synonyms
            .iter()
            .flat_map(|synonym| self.check_value(&synonym.description))
            .collect();
        report.insert(TermField::Synonyms, synonym_words);

        if report.is_empty() { None } else { Some(report) }
    }

    /// Check every term of an ontology.
    ///
    /// Reports come back in term identifier order, whether or not the
    /// terms were checked in parallel.
    pub fn check_ontology<'a>(&self, ontology: &'a Ontology) -> Vec<TermReport<'a>> {
        let terms: Vec<&Term> = ontology
            .terms()
            .filter(|term| self.include_obsolete || !term.obsolete)
            .collect();
        let skipped = ontology.len() - terms.len();
        if skipped > 0 {
            debug!("Skipping {skipped} obsolete terms");
        }

        let check = |term: &&'a Term| {
            self.check_term(term).map(|report| TermReport { term: *term, report })
        };
        let reports: Vec<TermReport<'a>> = if self.parallel {
            terms.par_iter().filter_map(check).collect()
        } else {
            terms.iter().filter_map(check).collect()
        };

        info!(
            "Checked {} terms with {} tokenizer: {} with unknown words",
            terms.len(),
            self.tokenizer.name(),
            reports.len()
        );
        reports
    }
}
