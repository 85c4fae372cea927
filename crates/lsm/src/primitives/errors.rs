//! Error types for least-squares fitting.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while fitting a
//! line, deriving line series from a fit, or writing a report.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., both input lengths).
//! * **Deferred**: Builder misuse is recorded and surfaced at `build()`.
//! * **Cloneable**: I/O failures are flattened to messages so the enum stays
//!   `Clone + PartialEq`.
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Too few points, non-finite values.
//! 2. **Length reconciliation**: Mismatched lengths, unknown strategies.
//! 3. **Numerical failure**: Zero abscissa variance.
//! 4. **Report output**: Failures while persisting the report.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// External dependencies
use thiserror::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for least-squares operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LsmError {
    /// Measurements are unusable: fewer than 3 points or a non-finite value.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Abscissa and ordinates differ in length and the strategy forbids reconciling them.
    #[error("Length mismatch: abscissa has {x_len} points, ordinates have {y_len}")]
    LengthMismatch {
        /// Number of abscissa values.
        x_len: usize,
        /// Number of ordinate values.
        y_len: usize,
    },

    /// Mismatch strategy outside the supported set.
    #[error("Unknown mismatch strategy: {0}")]
    UnknownStrategy(String),

    /// The abscissa has zero variance, so the slope is undefined.
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// A supplied fit description does not satisfy the fit-result invariants.
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    /// Parameter was set multiple times in the builder.
    #[error("Parameter '{parameter}' was set multiple times. Each parameter can only be configured once.")]
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// The report could not be written to disk.
    #[error("Failed to write report to '{path}': {message}")]
    ReportWrite {
        /// Destination that was requested.
        path: String,
        /// Underlying I/O error message.
        message: String,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, LsmError>;
