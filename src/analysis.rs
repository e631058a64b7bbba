//! Text analysis for spell-checking.
//!
//! This module splits free text into words and provides the filter chains
//! that decide which words are worth reporting.

pub mod tokenizer;
pub mod word_filter;
