//! Output types for least-squares operations.
//!
//! ## Purpose
//!
//! This module defines `LsmLines`, the line series derived from a fit, and
//! re-exports the fit description itself.
//!
//! ## Invariants
//!
//! * All vectors have the same length as `abscissa`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations beyond simple queries.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::lines::ProjectedLines;

pub use crate::algorithms::regression::LsmDescription;

// ============================================================================
// Line Series
// ============================================================================

/// Measurements together with the fitted line and its error bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct LsmLines<T> {
    /// Abscissa values (after length reconciliation).
    pub abscissa: Vec<T>,

    /// Ordinate values (after length reconciliation).
    pub ordinates: Vec<T>,

    /// Fitted line at each abscissa.
    pub line_predicted: Vec<T>,

    /// Upper bound line at each abscissa.
    pub line_above: Vec<T>,

    /// Lower bound line at each abscissa.
    pub line_under: Vec<T>,
}

impl<T: Float> LsmLines<T> {
    /// Assemble the series from measurements and projected lines.
    pub fn new(abscissa: Vec<T>, ordinates: Vec<T>, lines: ProjectedLines<T>) -> Self {
        debug_assert_eq!(abscissa.len(), lines.predicted.len());
        Self {
            abscissa,
            ordinates,
            line_predicted: lines.predicted,
            line_above: lines.above,
            line_under: lines.under,
        }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.abscissa.len()
    }

    /// Check if the series has no points.
    pub fn is_empty(&self) -> bool {
        self.abscissa.is_empty()
    }

    /// Residuals `y_i - y_hat_i`.
    pub fn residuals(&self) -> Vec<T> {
        self.ordinates
            .iter()
            .zip(&self.line_predicted)
            .map(|(&y, &p)| y - p)
            .collect()
    }
}
