//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer holds the numerical content of the crate: the closed-form
//! least-squares solver, the bound lines derived from a fit, and the policy
//! for reconciling inputs of different lengths.

/// Closed-form OLS solver.
pub mod regression;

/// Predicted and bound lines.
pub mod lines;

/// Length mismatch reconciliation.
pub mod mismatch;
