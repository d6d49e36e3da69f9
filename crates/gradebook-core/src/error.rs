//! Input error types.
//!
//! Malformed grades never show up here: the collector recovers from them by
//! re-prompting. Everything in [`InputError`] ends the run.

use thiserror::Error;

/// Errors that can occur while collecting the roster from input.
#[derive(Debug, Error)]
pub enum InputError {
    /// The student count was not a whole number.
    #[error("invalid student count {input:?}: expected a whole number")]
    InvalidCount { input: String },

    /// Input ended before a required line was read.
    #[error("input ended while waiting for {expected}")]
    UnexpectedEof { expected: String },

    /// Reading input or writing a prompt failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A grade line that did not parse as a finite number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed grade {input:?}")]
pub struct MalformedGrade {
    pub input: String,
}
