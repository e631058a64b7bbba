//! Per-term spell-check findings.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ontology::term::Term;

/// A checked field of a term.
///
/// The declaration order is the report order: name, definition, comment,
/// then the aggregated synonyms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermField {
    Name,
    Definition,
    Comment,
    Synonyms,
}

impl TermField {
    /// The single-valued text fields, in report order.
    pub const TEXT_FIELDS: [TermField; 3] =
        [TermField::Name, TermField::Definition, TermField::Comment];

    pub fn as_str(&self) -> &'static str {
        match self {
            TermField::Name => "name",
            TermField::Definition => "definition",
            TermField::Comment => "comment",
            TermField::Synonyms => "synonyms",
        }
    }

    /// The value of a single-valued text field; `None` for absent fields and
    /// for [`TermField::Synonyms`].
    pub fn value(self, term: &Term) -> Option<&str> {
        match self {
            TermField::Name => term.name.as_deref(),
            TermField::Definition => term.definition.as_deref(),
            TermField::Comment => term.comment.as_deref(),
            TermField::Synonyms => None,
        }
    }
}

impl fmt::Display for TermField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown words found in one term, grouped by field.
///
/// Fields iterate in [`TermField`] order and words in alphabetical order.
/// Fields without unknown words are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckReport {
    fields: BTreeMap<TermField, BTreeSet<String>>,
}

impl CheckReport {
    pub fn new() -> Self {
        CheckReport::default()
    }

    /// Record the unknown words of a field. Empty sets are ignored.
    pub fn insert(&mut self, field: TermField, words: BTreeSet<String>) {
        if !words.is_empty() {
            self.fields.insert(field, words);
        }
    }

    pub fn get(&self, field: TermField) -> Option<&BTreeSet<String>> {
        self.fields.get(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TermField, &BTreeSet<String>)> {
        self.fields.iter().map(|(field, words)| (*field, words))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of unknown words over all fields.
    pub fn word_count(&self) -> usize {
        self.fields.values().map(BTreeSet::len).sum()
    }
}

/// A term together with its non-empty report.
#[derive(Debug, Clone)]
pub struct TermReport<'a> {
    pub term: &'a Term,
    pub report: CheckReport,
}
