//! Line derivation from a fit description.
//!
//! ## Purpose
//!
//! This module evaluates the fitted line and its two error bounds over a set
//! of abscissa values, for plotting or reporting.
//!
//! ## Invariants
//!
//! * All three output vectors have the length of the input abscissa.
//! * `above[i] - predicted[i] == incline_error * x[i] + shift_error`, and
//!   symmetrically for `under`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::LsmDescription;

/// Predicted, upper and lower line values over an abscissa.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedLines<T> {
    /// `incline * x + shift`.
    pub predicted: Vec<T>,

    /// `(incline + incline_error) * x + shift + shift_error`.
    pub above: Vec<T>,

    /// `(incline - incline_error) * x + shift - shift_error`.
    pub under: Vec<T>,
}

/// Evaluate the three lines described by `description` at every `x`.
pub fn project_lines<T: Float>(x: &[T], description: &LsmDescription<T>) -> ProjectedLines<T> {
    let n = x.len();
    let mut predicted = Vec::with_capacity(n);
    let mut above = Vec::with_capacity(n);
    let mut under = Vec::with_capacity(n);

    for &xi in x {
        predicted.push(description.predict(xi));
        above.push(description.above(xi));
        under.push(description.under(xi));
    }

    ProjectedLines {
        predicted,
        above,
        under,
    }
}
