//! Error types for the costing engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a costing simulation.

use thiserror::Error;

/// The main error type for the costing engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application. The
/// calculators themselves are total functions; errors arise only at the
/// configuration and request-decoding boundaries.
///
/// # Example
///
/// ```
/// use costing_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or contained invalid values.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The request payload was structurally malformed.
    ///
    /// Raised when a list-shaped field is not a list or the payload is not
    /// an object. Missing optional fields and non-numeric amounts are not
    /// errors; they resolve to zero.
    #[error("Malformed input: {message}")]
    MalformedInput {
        /// A description of what made the payload malformed.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
