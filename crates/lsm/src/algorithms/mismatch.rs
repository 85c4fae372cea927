//! Reconciliation of abscissa and ordinates with different lengths.
//!
//! ## Purpose
//!
//! This module implements the policy applied when the two measurement
//! sequences handed to a fit do not have the same number of points.
//!
//! ## Design notes
//!
//! * **Strategy Pattern**: Uses `MismatchStrategy` enum to select the policy.
//! * **Explicit default**: `Fail` is the default so that lossy reconciliation
//!   is always opted into.
//! * **Allocation**: Returns new vectors; caller data is never modified.
//!
//! ## Invariants
//!
//! * `Truncate` only removes trailing elements of the longer sequence.
//! * Resolved sequences have length `min(x.len(), y.len())` and are prefixes
//!   of the inputs.
//!
//! ## Non-goals
//!
//! * This module does not pad, interpolate, or reorder data.

// External dependencies
use core::fmt::{Display, Formatter};
use core::str::FromStr;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::{LsmError, Result};

// ============================================================================
// Mismatch Strategy
// ============================================================================

/// Policy for handling abscissa and ordinates of different lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MismatchStrategy {
    /// Reject the input (default).
    #[default]
    Fail,

    /// Drop trailing points of the longer sequence.
    Truncate,
}

impl MismatchStrategy {
    /// Create from a u8 flag (0 = Fail, 1 = Truncate).
    pub fn from_u8(flag: u8) -> Result<Self> {
        match flag {
            0 => Ok(MismatchStrategy::Fail),
            1 => Ok(MismatchStrategy::Truncate),
            other => Err(LsmError::UnknownStrategy(format!("flag {other}"))),
        }
    }

    /// Convert to a u8 flag.
    pub fn to_u8(self) -> u8 {
        match self {
            MismatchStrategy::Fail => 0,
            MismatchStrategy::Truncate => 1,
        }
    }

    /// Name of the strategy.
    pub fn name(&self) -> &'static str {
        match self {
            MismatchStrategy::Fail => "fail",
            MismatchStrategy::Truncate => "truncate",
        }
    }

    /// Reconcile `x` and `y` into two sequences of equal length.
    ///
    /// Meant to be called only when the lengths differ; equal-length input
    /// is returned unchanged under either strategy.
    ///
    /// # Errors
    ///
    /// `Fail` returns [`LsmError::LengthMismatch`] for unequal lengths.
    pub fn resolve<T: Float>(self, x: &[T], y: &[T]) -> Result<(Vec<T>, Vec<T>)> {
        let (x_len, y_len) = (x.len(), y.len());
        if x_len == y_len {
            return Ok((x.to_vec(), y.to_vec()));
        }

        match self {
            MismatchStrategy::Fail => {
                tracing::warn!(x_len, y_len, "rejecting measurements of different lengths");
                Err(LsmError::LengthMismatch { x_len, y_len })
            }
            MismatchStrategy::Truncate => {
                let n = x_len.min(y_len);
                tracing::warn!(
                    x_len,
                    y_len,
                    dropped = x_len.max(y_len) - n,
                    "truncating longer sequence to match lengths"
                );
                Ok((x[..n].to_vec(), y[..n].to_vec()))
            }
        }
    }
}

impl Display for MismatchStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MismatchStrategy {
    type Err = LsmError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" | "fall" => Ok(MismatchStrategy::Fail),
            "truncate" | "cut" => Ok(MismatchStrategy::Truncate),
            _ => Err(LsmError::UnknownStrategy(s.to_string())),
        }
    }
}
