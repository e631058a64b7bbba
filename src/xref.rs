//! Cross-reference mapping between two ontologies.

pub mod resolver;
