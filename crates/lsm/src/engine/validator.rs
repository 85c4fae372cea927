//! Input validation for least-squares fitting.
//!
//! ## Purpose
//!
//! This module checks that measurement sequences and caller-supplied fit
//! descriptions are usable before any arithmetic is done.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Minimum size**: Error bars divide by `n - 2`, so at least 3 points are needed.
//! * **Finite Checks**: Every element must be a finite real (no NaN/Inf).
//!
//! ## Invariants
//!
//! * Validation logic is deterministic; the only side effect is a `WARN`
//!   event for each rejection.
//!
//! ## Non-goals
//!
//! * This module does not reconcile lengths (see the mismatch strategy).
//! * This module does not provide automatic correction of invalid inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::LsmDescription;
use crate::primitives::errors::{LsmError, Result};

/// Smallest number of points a fit with error estimates accepts.
pub const MIN_POINTS: usize = 3;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for measurements and fit descriptions.
pub struct Validator;

impl Validator {
    /// Validate one measurement sequence.
    ///
    /// `name` identifies the sequence in error messages.
    pub fn validate_measurements<T: Float>(values: &[T], name: &str) -> Result<()> {
        // Check 1: Enough points for n - 2 > 0
        if values.len() < MIN_POINTS {
            tracing::warn!(
                sequence = name,
                points = values.len(),
                min = MIN_POINTS,
                "too few measurements"
            );
            return Err(LsmError::InvalidInput(format!(
                "{name} has {} points, need at least {MIN_POINTS}",
                values.len()
            )));
        }

        // Check 2: All values finite
        Self::validate_finite(values, name)
    }

    /// Validate that every element of `values` is finite.
    pub fn validate_finite<T: Float>(values: &[T], name: &str) -> Result<()> {
        if let Some((i, v)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            tracing::warn!(sequence = name, index = i, "non-finite measurement");
            return Err(LsmError::InvalidInput(format!(
                "{name}[{i}]={} is not a finite number",
                v.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate a fit description supplied by the caller.
    pub fn validate_description<T: Float>(description: &LsmDescription<T>) -> Result<()> {
        if !description.is_valid() {
            tracing::warn!("supplied fit description violates fit-result invariants");
            return Err(LsmError::TypeMismatch(format!(
                "not a least-squares fit result: incline={}, shift={}, incline_error={}, shift_error={}",
                description.incline.to_f64().unwrap_or(f64::NAN),
                description.shift.to_f64().unwrap_or(f64::NAN),
                description.incline_error.to_f64().unwrap_or(f64::NAN),
                description.shift_error.to_f64().unwrap_or(f64::NAN),
            )));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<()> {
        if let Some(param) = duplicate_param {
            return Err(LsmError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
