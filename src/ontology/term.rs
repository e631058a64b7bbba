//! Term records of a loaded ontology.
//!
//! A [`Term`] carries the free-text fields that are spell-checked (name,
//! definition, comment, synonyms) and the cross-references used for xref
//! mapping. Terms are immutable once an [`Ontology`](crate::ontology::Ontology)
//! has been built from them.
//!
//! # Examples
//!
//! ```
//! use oboscan::ontology::term::Term;
//!
//! let term = Term::new("FBbt:00005106")
//!     .with_name("neuron")
//!     .with_definition("Cell that transmits nerve impulses.")
//!     .with_xref("CL:0000540");
//!
//! assert_eq!(term.id, "FBbt:00005106");
//! assert_eq!(term.xref_ids().collect::<Vec<_>>(), vec!["CL:0000540"]);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Scope of a synonym, as declared in OBO `synonym:` tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SynonymScope {
    Exact,
    Broad,
    Narrow,
    #[default]
    Related,
}

impl FromStr for SynonymScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EXACT" => Ok(SynonymScope::Exact),
            "BROAD" => Ok(SynonymScope::Broad),
            "NARROW" => Ok(SynonymScope::Narrow),
            "RELATED" => Ok(SynonymScope::Related),
            other => Err(format!("unknown synonym scope '{other}'")),
        }
    }
}

impl fmt::Display for SynonymScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SynonymScope::Exact => "EXACT",
            SynonymScope::Broad => "BROAD",
            SynonymScope::Narrow => "NARROW",
            SynonymScope::Related => "RELATED",
        };
        f.write_str(s)
    }
}

/// An alternative label for a term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synonym {
    /// The synonym text, subject to spell-checking
    pub description: String,
    pub scope: SynonymScope,
}

impl Synonym {
    /// Create a RELATED synonym, the OBO default scope.
    pub fn new<S: Into<String>>(description: S) -> Self {
        Synonym {
            description: description.into(),
            scope: SynonymScope::default(),
        }
    }

    pub fn with_scope(mut self, scope: SynonymScope) -> Self {
        self.scope = scope;
        self
    }
}

/// A cross-reference to an identifier in another vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xref {
    /// The foreign identifier, e.g. `CL:0000540`
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Xref {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Xref {
            id: id.into(),
            description: None,
        }
    }
}

/// A single concept entry of an ontology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Identifier, unique within one ontology
    pub id: String,
    pub name: Option<String>,
    pub definition: Option<String>,
    pub comment: Option<String>,
    pub obsolete: bool,
    /// Synonyms in declaration order
    pub synonyms: Vec<Synonym>,
    /// Cross-references in declaration order; the order is significant for
    /// first-match xref resolution
    pub xrefs: Vec<Xref>,
}

impl Term {
    /// Create a term with the given identifier and no other content.
    pub fn new<S: Into<String>>(id: S) -> Self {
        Term {
            id: id.into(),
            name: None,
            definition: None,
            comment: None,
            obsolete: false,
            synonyms: Vec::new(),
            xrefs: Vec::new(),
        }
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_definition<S: Into<String>>(mut self, definition: S) -> Self {
        self.definition = Some(definition.into());
        self
    }

    pub fn with_comment<S: Into<String>>(mut self, comment: S) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_synonym<S: Into<String>>(mut self, description: S) -> Self {
        self.synonyms.push(Synonym::new(description));
        self
    }

    pub fn with_xref<S: Into<String>>(mut self, id: S) -> Self {
        self.xrefs.push(Xref::new(id));
        self
    }

    pub fn obsolete(mut self, obsolete: bool) -> Self {
        self.obsolete = obsolete;
        self
    }

    /// The term name, or an empty string for unnamed terms.
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Identifiers of the cross-references, in declaration order.
    pub fn xref_ids(&self) -> impl Iterator<Item = &str> {
        self.xrefs.iter().map(|x| x.id.as_str())
    }
}
