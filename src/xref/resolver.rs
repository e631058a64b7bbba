//! Reciprocal cross-reference mapping between two ontologies.
//!
//! For every term of the source ontology, the resolver looks for the first
//! xref naming a term of the foreign ontology, then checks whether that
//! foreign term has an xref back into the source ontology.
//!
//! ```text
//! A:1 (Alpha)  xrefs [B:9, B:2]  ──► B:2 (Beta)  xrefs [A:1]  ──► A:1 (Alpha)
//!
//! A:1,Alpha,B:2,Beta,A:1,Alpha
//! ```
//!
//! # Examples
//!
//! ```
//! use oboscan::ontology::Ontology;
//! use oboscan::ontology::term::Term;
//! use oboscan::xref::resolver::XrefResolver;
//!
//! let source = Ontology::from_terms(vec![
//!     Term::new("A:1").with_name("Alpha").with_xref("B:9").with_xref("B:2"),
//! ]).unwrap();
//! let foreign = Ontology::from_terms(vec![
//!     Term::new("B:2").with_name("Beta").with_xref("A:1"),
//! ]).unwrap();
//!
//! let matches = XrefResolver::new(&source, &foreign).resolve();
//! assert_eq!(matches[0].foreign_id, "B:2");
//! assert!(matches[0].is_reciprocal());
//! ```

use ahash::AHashSet;
use log::info;
use serde::{Deserialize, Serialize};

use crate::ontology::Ontology;
use crate::ontology::term::Term;

/// The set of term identifiers of one ontology.
///
/// Only identifiers of terms actually present in the ontology are indexed,
/// so a dangling xref never matches.
#[derive(Debug, Clone)]
pub struct IdIndex<'a> {
    ids: AHashSet<&'a str>,
}

impl<'a> IdIndex<'a> {
    /// Index every term identifier of `ontology`.
    pub fn build(ontology: &'a Ontology) -> Self {
        IdIndex {
            ids: ontology.ids().collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// The first xref of `term`, in declaration order, whose identifier is in
/// `index`.
pub fn find_matching_xref<'t>(term: &'t Term, index: &IdIndex<'_>) -> Option<&'t str> {
    term.xref_ids().find(|id| index.contains(id))
}

/// A source term mapped to a foreign term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XrefMatch {
    pub source_id: String,
    pub source_name: String,
    pub foreign_id: String,
    pub foreign_name: String,
    /// The source term the foreign term refers back to, if any
    pub reciprocal_id: Option<String>,
    pub reciprocal_name: Option<String>,
}

impl XrefMatch {
    /// Whether the foreign term has an xref back into the source ontology.
    ///
    /// The reciprocal term need not be the source term itself.
    pub fn is_reciprocal(&self) -> bool {
        self.reciprocal_id.is_some()
    }

    /// The six output columns; absent reciprocal fields are empty strings.
    pub fn to_record(&self) -> [&str; 6] {
        [
            self.source_id.as_str(),
            self.source_name.as_str(),
            self.foreign_id.as_str(),
            self.foreign_name.as_str(),
            self.reciprocal_id.as_deref().unwrap_or(""),
            self.reciprocal_name.as_deref().unwrap_or(""),
        ]
    }
}

/// Resolver of xref mappings from a source ontology to a foreign one.
#[derive(Debug)]
pub struct XrefResolver<'a> {
    source: &'a Ontology,
    foreign: &'a Ontology,
    source_ids: IdIndex<'a>,
    foreign_ids: IdIndex<'a>,
}

impl<'a> XrefResolver<'a> {
    /// Build the identifier indexes of both ontologies.
    pub fn new(source: &'a Ontology, foreign: &'a Ontology) -> Self {
        XrefResolver {
            source,
            foreign,
            source_ids: IdIndex::build(source),
            foreign_ids: IdIndex::build(foreign),
        }
    }

    /// Map one source term, or `None` if none of its xrefs names a foreign
    /// term.
    pub fn resolve_term(&self, term: &Term) -> Option<XrefMatch> {
        let foreign_id = find_matching_xref(term, &self.foreign_ids)?;
        let foreign_term = self.foreign.get(foreign_id)?;

        let reciprocal = find_matching_xref(foreign_term, &self.source_ids)
            .and_then(|id| self.source.get(id));

        Some(XrefMatch {
            source_id: term.id.clone(),
            source_name: term.name_or_empty().to_string(),
            foreign_id: foreign_term.id.clone(),
            foreign_name: foreign_term.name_or_empty().to_string(),
            reciprocal_id: reciprocal.map(|t| t.id.clone()),
            reciprocal_name: reciprocal.map(|t| t.name_or_empty().to_string()),
        })
    }

    /// Map every source term, in identifier order. Terms without a matching
    /// xref produce no entry.
    pub fn resolve(&self) -> Vec<XrefMatch> {
        let matches: Vec<XrefMatch> = self
            .source
            .terms()
            .filter_map(|term| self.resolve_term(term))
            .collect();

        info!(
            "{} of {} source terms map to the foreign ontology, {} reciprocally",
            matches.len(),
            self.source.len(),
            matches.iter().filter(|m| m.is_reciprocal()).count()
        );
        matches
    }
}
