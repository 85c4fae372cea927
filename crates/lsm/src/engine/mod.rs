//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a fit by coordinating validation, length
//! reconciliation and the algorithms.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Execution engine for fitting and projection.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for least-squares operations.
pub mod output;
