//! Spell-checking of ontology term text.
//!
//! This module detects likely misspellings in term names, definitions,
//! comments and synonyms: a word-frequency dictionary, the configurable
//! filter pipeline built on top of it, and the per-term reports it produces.

pub mod checker;
pub mod config;
pub mod dictionary;
pub mod report;
