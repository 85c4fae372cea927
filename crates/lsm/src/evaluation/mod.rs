//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer turns fit results into human-readable output.

/// Text report rendering and persistence.
pub mod report;
