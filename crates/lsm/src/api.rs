//! High-level API for least-squares line fitting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring the mismatch strategy and the report, and
//! convenience functions for one-off calls.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Configuration errors are deferred and reported by `.build()`.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`LsmBuilder`] via `Lsm::new()`.
//! 2. Chain configuration methods (`.mismatch_strategy()`, `.precision()`, ...).
//! 3. Call `.build()` to get an [`LsmFitter`].

// External dependencies
use core::fmt::{Debug, Display};
use core::marker::PhantomData;
use num_traits::Float;
use std::path::PathBuf;

// Internal dependencies
use crate::engine::executor::LsmExecutor;
use crate::engine::validator::Validator;
use crate::evaluation::report::report;

// Publicly re-exported types
pub use crate::algorithms::mismatch::MismatchStrategy;
pub use crate::engine::output::{LsmDescription, LsmLines};
pub use crate::evaluation::report::{DEFAULT_PRECISION, ReportConfig};
pub use crate::primitives::errors::{LsmError, Result};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a least-squares fitter.
#[derive(Debug, Clone)]
pub struct LsmBuilder<T> {
    /// Policy for measurements of different lengths (default: Fail).
    pub mismatch_strategy: Option<MismatchStrategy>,

    /// Decimal digits in the report (default: 3).
    pub precision: Option<usize>,

    /// File the report is saved to.
    pub report_path: Option<PathBuf>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,

    _marker: PhantomData<T>,
}

impl<T: Float> Default for LsmBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LsmBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            mismatch_strategy: None,
            precision: None,
            report_path: None,
            duplicate_param: None,
            _marker: PhantomData,
        }
    }

    /// Set the policy for measurements of different lengths.
    pub fn mismatch_strategy(mut self, strategy: MismatchStrategy) -> Self {
        if self.mismatch_strategy.is_some() {
            self.duplicate_param = Some("mismatch_strategy");
        }
        self.mismatch_strategy = Some(strategy);
        self
    }

    /// Set the number of decimal digits printed in the report.
    pub fn precision(mut self, precision: usize) -> Self {
        if self.precision.is_some() {
            self.duplicate_param = Some("precision");
        }
        self.precision = Some(precision);
        self
    }

    /// Save every report produced by the fitter to `path` (overwriting).
    pub fn save_to(mut self, path: impl Into<PathBuf>) -> Self {
        if self.report_path.is_some() {
            self.duplicate_param = Some("save_to");
        }
        self.report_path = Some(path.into());
        self
    }

    /// Validate the configuration and build the fitter.
    pub fn build(self) -> Result<LsmFitter<T>> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(LsmFitter {
            executor: LsmExecutor::new()
                .mismatch_strategy(self.mismatch_strategy.unwrap_or_default()),
            report: ReportConfig {
                precision: self.precision.unwrap_or(DEFAULT_PRECISION),
                path: self.report_path,
            },
            _marker: PhantomData,
        })
    }
}

// ============================================================================
// Fitter
// ============================================================================

/// Configured least-squares fitter.
#[derive(Debug, Clone)]
pub struct LsmFitter<T> {
    executor: LsmExecutor,
    report: ReportConfig,
    _marker: PhantomData<T>,
}

impl<T: Float + Debug + Display> LsmFitter<T> {
    /// Fit a line through `(abscissa, ordinates)`.
    pub fn fit(&self, abscissa: &[T], ordinates: &[T]) -> Result<LsmDescription<T>> {
        self.executor.fit(abscissa, ordinates)
    }

    /// Derive the predicted and bound lines, fitting first when no
    /// description is supplied.
    pub fn lines(
        &self,
        abscissa: &[T],
        ordinates: &[T],
        description: Option<&LsmDescription<T>>,
    ) -> Result<LsmLines<T>> {
        self.executor.project(abscissa, ordinates, description)
    }

    /// Render the report for `description`, saving it if a path is configured.
    pub fn report(&self, description: &LsmDescription<T>) -> Result<String> {
        report(description, &self.report)
    }

    /// Configured mismatch strategy.
    pub fn strategy(&self) -> MismatchStrategy {
        self.executor.mismatch_strategy
    }

    /// Configured report settings.
    pub fn report_config(&self) -> &ReportConfig {
        &self.report
    }
}

// ============================================================================
// Convenience Functions
// ============================================================================

/// Fit a line through `(abscissa, ordinates)` with the given strategy.
pub fn get_lsm_description<T: Float + Debug>(
    abscissa: &[T],
    ordinates: &[T],
    mismatch_strategy: MismatchStrategy,
) -> Result<LsmDescription<T>> {
    LsmExecutor::new()
        .mismatch_strategy(mismatch_strategy)
        .fit(abscissa, ordinates)
}

/// Derive the predicted and bound lines with the default strategy.
pub fn get_lsm_lines<T: Float + Debug>(
    abscissa: &[T],
    ordinates: &[T],
    description: Option<&LsmDescription<T>>,
) -> Result<LsmLines<T>> {
    LsmExecutor::new().project(abscissa, ordinates, description)
}

/// Render the report with the default precision, saving it to `path` if given.
pub fn get_report<T: Float + Display>(
    description: &LsmDescription<T>,
    path: Option<PathBuf>,
) -> Result<String> {
    report(
        description,
        &ReportConfig {
            precision: DEFAULT_PRECISION,
            path,
        },
    )
}
