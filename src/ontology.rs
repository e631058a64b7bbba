//! Loaded ontologies: an immutable set of terms addressable by identifier.
//!
//! Terms are kept in a `BTreeMap`, which gives identifier-sorted iteration
//! and `O(log n)` lookup. Both analyses rely on that order for deterministic
//! output.

pub mod obo;
pub mod term;

use std::collections::BTreeMap;
use std::path::Path;

use log::info;

use crate::error::{OboscanError, Result};
use crate::ontology::obo::OboReader;
use crate::ontology::term::Term;

/// An immutable collection of terms with unique identifiers.
#[derive(Debug, Clone, Default)]
pub struct Ontology {
    terms: BTreeMap<String, Term>,
}

impl Ontology {
    /// Build an ontology from term records.
    ///
    /// Fails with a load error if two terms share an identifier.
    pub fn from_terms<I>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = Term>,
    {
        let mut map = BTreeMap::new();
        for term in terms {
            if map.contains_key(&term.id) {
                return Err(OboscanError::load(format!("duplicate term id '{}'", term.id)));
            }
            map.insert(term.id.clone(), term);
        }
        Ok(Ontology { terms: map })
    }

    /// Load an ontology from an OBO file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let terms = OboReader::new().read_file(path)?;
        let ontology = Self::from_terms(terms).map_err(|e| match e {
            OboscanError::Load(msg) => OboscanError::load(format!("{}: {}", path.display(), msg)),
            other => other,
        })?;
        info!("Loaded {} terms from {}", ontology.len(), path.display());
        Ok(ontology)
    }

    pub fn get(&self, id: &str) -> Option<&Term> {
        self.terms.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.terms.contains_key(id)
    }

    /// Iterate over all terms, sorted by identifier.
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.terms.values()
    }

    /// Iterate over all identifiers, sorted.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
