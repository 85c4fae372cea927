//! Execution engine for least-squares operations.
//!
//! ## Purpose
//!
//! This module orchestrates a fit: it validates the measurements, reconciles
//! their lengths when needed, runs the closed-form solver, and derives the
//! bound lines from a fit description.
//!
//! ## Design notes
//!
//! * Inputs are borrowed; reconciled copies are only made when lengths differ.
//! * The "fit supplied or not" choice is an `Option`, decided at compile time.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * The solver only ever sees validated, equal-length input with n >= 3.
//! * The mismatch strategy is only consulted when lengths differ.
//!
//! ## Non-goals
//!
//! * This module does not format or persist reports.

// External dependencies
use core::fmt::Debug;
use num_traits::Float;
use std::borrow::Cow;

// Internal dependencies
use crate::algorithms::lines::project_lines;
use crate::algorithms::mismatch::MismatchStrategy;
use crate::algorithms::regression::{LsmDescription, fit_ols};
use crate::engine::output::LsmLines;
use crate::engine::validator::Validator;
use crate::primitives::errors::Result;

/// Measurements borrowed when lengths agree, owned after reconciliation.
type Resolved<'a, T> = (Cow<'a, [T]>, Cow<'a, [T]>);

// ============================================================================
// Executor
// ============================================================================

/// Executor for fitting and line projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LsmExecutor {
    /// Policy for measurements of different lengths.
    pub mismatch_strategy: MismatchStrategy,
}

impl LsmExecutor {
    /// Create an executor with the default (`Fail`) strategy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mismatch strategy.
    pub fn mismatch_strategy(mut self, strategy: MismatchStrategy) -> Self {
        self.mismatch_strategy = strategy;
        self
    }

    /// Apply the mismatch strategy if, and only if, the lengths differ.
    fn reconcile<'a, T: Float>(&self, x: &'a [T], y: &'a [T]) -> Result<Resolved<'a, T>> {
        if x.len() == y.len() {
            return Ok((Cow::Borrowed(x), Cow::Borrowed(y)));
        }
        let (rx, ry) = self.mismatch_strategy.resolve(x, y)?;
        Ok((Cow::Owned(rx), Cow::Owned(ry)))
    }

    /// Validate, reconcile and fit.
    pub fn fit<T: Float + Debug>(&self, x: &[T], y: &[T]) -> Result<LsmDescription<T>> {
        let span = tracing::debug_span!(
            "lsm.fit",
            x_len = x.len(),
            y_len = y.len(),
            strategy = %self.mismatch_strategy
        );
        let _guard = span.enter();

        Validator::validate_measurements(x, "abscissa")?;
        Validator::validate_measurements(y, "ordinates")?;

        let (x, y) = self.reconcile(x, y)?;
        let description = fit_ols(&x, &y)?;

        tracing::debug!(
            points = x.len(),
            incline = description.incline.to_f64(),
            shift = description.shift.to_f64(),
            incline_error = description.incline_error.to_f64(),
            shift_error = description.shift_error.to_f64(),
            "least-squares fit"
        );
        Ok(description)
    }

    /// Derive the predicted, upper and lower lines.
    ///
    /// When `description` is `None`, it is computed from the same inputs with
    /// [`fit`](Self::fit). A supplied description must satisfy the fit-result
    /// invariants; the measurements then only need to be finite.
    pub fn project<T: Float + Debug>(
        &self,
        x: &[T],
        y: &[T],
        description: Option<&LsmDescription<T>>,
    ) -> Result<LsmLines<T>> {
        let description = match description {
            Some(d) => {
                Validator::validate_description(d)?;
                Validator::validate_finite(x, "abscissa")?;
                Validator::validate_finite(y, "ordinates")?;
                *d
            }
            None => self.fit(x, y)?,
        };

        let (x, y) = self.reconcile(x, y)?;
        let lines = project_lines(&x, &description);
        Ok(LsmLines::new(x.into_owned(), y.into_owned(), lines))
    }
}
