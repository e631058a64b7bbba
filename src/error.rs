//! Error types for oboscan.
//!
//! All fallible operations return [`OboscanError`] through the crate-wide
//! [`Result`] alias. Only loading can fail: once ontologies and dictionaries
//! are in memory, tokenization, filtering, lookup and xref resolution are
//! total functions and return plain values.
//!
//! # Examples
//!
//! ```
//! use oboscan::error::{OboscanError, Result};
//!
//! fn load_something() -> Result<()> {
//!     Err(OboscanError::load("go.obo: no such file"))
//! }
//!
//! match load_something() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for oboscan operations.
#[derive(Error, Debug)]
pub enum OboscanError {
    /// I/O errors (file operations, output sinks, subprocess pipes)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Ontology could not be loaded (missing file, unreadable, malformed)
    #[error("Cannot load ontology: {0}")]
    Load(String),

    /// Additional dictionary source could not be loaded
    #[error("Cannot load dictionary: {0}")]
    Dictionary(String),

    /// Checker configuration could not be read or is invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writer errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with OboscanError.
pub type Result<T> = std::result::Result<T, OboscanError>;

impl OboscanError {
    /// Create a new ontology load error.
    pub fn load<S: Into<String>>(msg: S) -> Self {
        OboscanError::Load(msg.into())
    }

    /// Create a new dictionary load error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        OboscanError::Dictionary(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        OboscanError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        OboscanError::Other(msg.into())
    }
}
