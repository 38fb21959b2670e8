//! Error types for the leave planner.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only two conditions are modeled as errors: an invalid work-week pattern
//! (the single fatal configuration error) and a failed report write (which
//! is reported but never aborts a run). Malformed input records are handled
//! per item as `Option` results by the parsers, not as errors.

use thiserror::Error;

/// The main error type for the leave planner.
///
/// # Example
///
/// ```
/// use leave_planner::error::PlannerError;
///
/// let error = PlannerError::InvalidWorkWeek {
///     pattern: "11111".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid working-days pattern '11111': expected 7 characters of 0/1 (e.g. 1111100 for Mon-Fri)"
/// );
/// ```
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Work-week pattern was not exactly 7 characters of `0`/`1`.
    #[error(
        "Invalid working-days pattern '{pattern}': expected 7 characters of 0/1 (e.g. 1111100 for Mon-Fri)"
    )]
    InvalidWorkWeek {
        /// The pattern string that failed validation.
        pattern: String,
    },

    /// The rendered report could not be written to the output path.
    #[error("Failed to write HTML file '{path}': {message}")]
    WriteFailed {
        /// The output path that could not be written.
        path: String,
        /// A description of the underlying I/O error.
        message: String,
    },
}

/// A type alias for Results that return [`PlannerError`].
pub type PlannerResult<T> = Result<T, PlannerError>;
