//! Regression Logic
//!
//! ## Purpose
//!
//! This module provides the closed-form ordinary least squares (OLS) solver
//! for a straight line, including:
//! - The fit description (slope, intercept and their standard errors).
//! - Accumulation of the raw and centered sample moments.
//! - The solver with error propagation and the degenerate-variance guard.

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::{LsmError, Result};

// ============================================================================
// Fit Description
// ============================================================================

/// Result of a least-squares line fit.
///
/// Describes the line `y = incline * x + shift` together with the standard
/// errors of both coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LsmDescription<T> {
    /// Estimated slope.
    pub incline: T,

    /// Estimated intercept.
    pub shift: T,

    /// Standard error of the slope.
    pub incline_error: T,

    /// Standard error of the intercept.
    pub shift_error: T,
}

impl<T: Float> LsmDescription<T> {
    /// Fitted value at `x`.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.incline * x + self.shift
    }

    /// Upper bound line at `x`: both coefficients shifted up by their errors.
    #[inline]
    pub fn above(&self, x: T) -> T {
        (self.incline + self.incline_error) * x + self.shift + self.shift_error
    }

    /// Lower bound line at `x`: both coefficients shifted down by their errors.
    #[inline]
    pub fn under(&self, x: T) -> T {
        (self.incline - self.incline_error) * x + self.shift - self.shift_error
    }

    /// Check that all fields are finite and both error terms are non-negative.
    pub fn is_valid(&self) -> bool {
        self.incline.is_finite()
            && self.shift.is_finite()
            && self.incline_error.is_finite()
            && self.shift_error.is_finite()
            && self.incline_error >= T::zero()
            && self.shift_error >= T::zero()
    }
}

// ============================================================================
// Moment Accumulation
// ============================================================================

/// Sample means needed by the closed-form solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments<T> {
    /// Number of points.
    pub n: usize,

    /// Mean of `x`.
    pub mean_x: T,

    /// Mean of `y`.
    pub mean_y: T,

    /// Mean of `x * y`.
    pub mean_xy: T,

    /// Mean of `x^2`.
    pub mean_x2: T,

    /// Mean of `(x - mean_x)^2`.
    pub centered_xx: T,

    /// Mean of `(x - mean_x) * (y - mean_y)`.
    pub centered_xy: T,
}

impl<T: Float> Moments<T> {
    /// Population variance of `x`.
    ///
    /// Equal to `mean(x^2) - mean(x)^2`, taken around the mean so that an
    /// offset abscissa does not cancel away its spread.
    #[inline]
    pub fn variance_x(&self) -> T {
        self.centered_xx
    }

    /// Population covariance of `x` and `y`.
    #[inline]
    pub fn covariance_xy(&self) -> T {
        self.centered_xy
    }
}

/// Accumulate the raw and centered sample means of `x` and `y`.
///
/// Raw sums are taken in one pass and the centered ones in a second pass
/// around the means. Both slices must have the same non-zero length.
pub fn accumulate_moments<T: Float>(x: &[T], y: &[T]) -> Moments<T> {
    debug_assert_eq!(x.len(), y.len(), "accumulate_moments: length mismatch");

    let n = x.len();
    let mut sum_x = T::zero();
    let mut sum_y = T::zero();
    let mut sum_xy = T::zero();
    let mut sum_x2 = T::zero();

    for (&xi, &yi) in x.iter().zip(y) {
        sum_x = sum_x + xi;
        sum_y = sum_y + yi;
        sum_xy = sum_xy + xi * yi;
        sum_x2 = sum_x2 + xi * xi;
    }

    let n_t = T::from(n).unwrap_or_else(T::nan);
    let mean_x = sum_x / n_t;
    let mean_y = sum_y / n_t;

    let mut sum_dxx = T::zero();
    let mut sum_dxy = T::zero();
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        sum_dxx = sum_dxx + dx * dx;
        sum_dxy = sum_dxy + dx * (yi - mean_y);
    }

    Moments {
        n,
        mean_x,
        mean_y,
        mean_xy: sum_xy / n_t,
        mean_x2: sum_x2 / n_t,
        centered_xx: sum_dxx / n_t,
        centered_xy: sum_dxy / n_t,
    }
}

// ============================================================================
// Solver
// ============================================================================

/// Sum of squared residuals of `y` around the line `incline * x + shift`.
#[inline]
pub fn residual_sum_of_squares<T: Float>(x: &[T], y: &[T], incline: T, shift: T) -> T {
    x.iter().zip(y).fold(T::zero(), |acc, (&xi, &yi)| {
        let r = yi - incline * xi - shift;
        acc + r * r
    })
}

/// Compute the OLS line and the standard errors of its coefficients.
///
/// # Preconditions
///
/// * `x` and `y` are validated, finite and of equal length `n >= 3`.
///
/// # Errors
///
/// Returns [`LsmError::InvalidInput`] for unequal lengths or fewer than 3
/// points, and [`LsmError::DegenerateInput`] when the abscissa variance
/// vanishes (all `x` equal up to round-off), the moments overflow, or the
/// solution is not finite.
pub fn fit_ols<T: Float + Debug>(x: &[T], y: &[T]) -> Result<LsmDescription<T>> {
    if x.len() != y.len() || x.len() < 3 {
        return Err(LsmError::InvalidInput(format!(
            "fit needs two equal-length sequences of at least 3 points, got {} and {}",
            x.len(),
            y.len()
        )));
    }

    let moments = accumulate_moments(x, y);
    let n = moments.n;

    let n_t = T::from(n).unwrap_or_else(T::nan);
    let variance = moments.variance_x();

    if !(variance.is_finite() && moments.mean_x2.is_finite()) {
        tracing::warn!(points = n, "abscissa moments overflow");
        return Err(LsmError::DegenerateInput(format!(
            "abscissa moments overflow over {n} points"
        )));
    }

    // Identical abscissae can still leave a few ulps of spread around a rounded mean.
    let first = x[0];
    let scale = x.iter().fold(T::zero(), |m, &xi| m.max(xi.abs()));
    let noise = n_t * T::epsilon() * scale;
    if x.iter().all(|&xi| xi == first) || !(variance > noise * noise) {
        tracing::warn!(points = n, "abscissa has zero variance, slope is undefined");
        return Err(LsmError::DegenerateInput(format!(
            "abscissa variance is zero over {n} points"
        )));
    }

    let incline = moments.covariance_xy() / variance;
    let shift = moments.mean_y - incline * moments.mean_x;

    let dof = T::from(n - 2).unwrap_or_else(T::nan);
    let residual_variance = residual_sum_of_squares(x, y, incline, shift) / dof;

    let incline_error = (residual_variance / (n_t * variance)).sqrt();
    let shift_error = (residual_variance * moments.mean_x2 / (n_t * variance)).sqrt();

    let description = LsmDescription {
        incline,
        shift,
        incline_error,
        shift_error,
    };

    if !description.is_valid() {
        tracing::warn!(points = n, ?description, "least-squares solution overflows");
        return Err(LsmError::DegenerateInput(format!(
            "least-squares solution overflows over {n} points"
        )));
    }

    Ok(description)
}
