//! Error types for registration, lookup and example execution.

use thiserror::Error;

/// Harness errors.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// An example with this name is already registered.
    #[error("example {0} is already registered")]
    DuplicateName(String),

    /// No example with this name is registered.
    #[error("no such example: {0}")]
    NotFound(String),

    /// Example names must be non-empty and free of whitespace.
    #[error("invalid example name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// An example action returned an error or panicked.
    #[error("example {name} failed: {message}")]
    ExampleExecution { name: String, message: String },

    /// A name filter did not compile as a regular expression.
    #[error("invalid filter: {0}")]
    InvalidFilter(#[from] regex::Error),
}

/// Result type for harness operations.
pub type Result<T> = std::result::Result<T, HarnessError>;
