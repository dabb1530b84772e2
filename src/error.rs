//! Unified error type for property construction and resolution.
//!
//! The model favors partial results over aborting a parse: most malformed
//! input degrades to a zero/absent value instead of an error. The variants
//! here cover the few conditions worth surfacing to the tokenizer driving
//! construction.

use thiserror::Error;

/// Main error type for docprop operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Unrecognized boolean literal in the markup stream.
    ///
    /// Unlike malformed numbers, a bad boolean token usually points at a
    /// grammar bug in the producer, so it is reported rather than coerced.
    #[error("invalid boolean literal '{0}'")]
    InvalidBoolean(String),

    /// The package layer has no payload for the requested handle.
    #[error("binary payload '{0}' not found")]
    BinaryNotFound(String),
}

/// Result type for docprop operations.
pub type Result<T> = std::result::Result<T, Error>;
