//! Error types shared by the instance model and both search engines.

use thiserror::Error;

/// Errors produced while building instances or running a search engine.
#[derive(Debug, Error)]
pub enum TspError {
    /// Instance data is structurally broken: size/matrix mismatch, or a
    /// distance entry that is missing, negative, or non-finite.
    #[error("malformed instance: {0}")]
    MalformedInstance(String),

    /// The instance is too small for an operator to pick the distinct
    /// indices it needs (crossover needs n >= 3, mutation and neighborhood
    /// generation need n >= 4).
    #[error("degenerate instance: {size} cities, operator requires at least {required}")]
    DegenerateInstance {
        /// Number of cities in the offending instance.
        size: usize,
        /// Minimum city count the rejected operation needs.
        required: usize,
    },

    /// A temperature or probability computation produced a non-finite value
    /// that could not be clamped or skipped.
    #[error("numeric instability: {0}")]
    NumericInstability(String),

    /// Invalid engine configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Failure reading or writing an instance/tour file.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TspError>;
