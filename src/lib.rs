//! # oboscan
//!
//! Quality checks for OBO ontologies.
//!
//! ## Features
//!
//! - Spell-checking of term names, definitions, comments and synonyms
//!   against a word-frequency dictionary
//! - Composable word filters applied before and after dictionary lookup
//! - Custom dictionaries from files, standard input or shell commands
//! - Reciprocal cross-reference mapping between two ontologies

pub mod analysis;
pub mod cli;
pub mod error;
pub mod ontology;
pub mod spelling;
pub mod xref;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
