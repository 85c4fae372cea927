//! # LSM: ordinary least-squares line fitting for Rust
//!
//! Fits the straight line `y = incline * x + shift` through paired
//! measurements with the closed-form least-squares solution, and estimates
//! the standard errors of both coefficients.
//!
//! ## Quick Start
//!
//! ```rust
//! use lsm::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = vec![2.1, 3.9, 6.05, 7.9, 10.1];
//!
//! let fitter = Lsm::new().build()?;
//! let description = fitter.fit(&x, &y)?;
//!
//! println!("{}", description);
//! # Result::<(), LsmError>::Ok(())
//! ```
//!
//! ```text
//! ========================================LSM computing result========================================
//!
//! [INFO]: incline: 2.000;
//! [INFO]: shift: 0.010;
//! [INFO]: incline error: 0.037;
//! [INFO]: shift error: 0.124;
//!
//! ====================================================================================================
//! ```
//!
//! ### Mismatched lengths
//!
//! By default, measurements of different lengths are rejected. Opt into
//! dropping the trailing points of the longer sequence with `Truncate`:
//!
//! ```rust
//! use lsm::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0];
//! let y = vec![1.0, 2.0, 3.1, 4.0];
//!
//! assert!(matches!(
//!     Lsm::new().build()?.fit(&x, &y),
//!     Err(LsmError::LengthMismatch { x_len: 3, y_len: 4 })
//! ));
//!
//! let fitter = Lsm::new().mismatch_strategy(Truncate).build()?;
//! let lines = fitter.lines(&x, &y, None)?;
//! assert_eq!(lines.ordinates, vec![1.0, 2.0, 3.1]);
//! # Result::<(), LsmError>::Ok(())
//! ```
//!
//! ### Lines and reports
//!
//! ```rust,no_run
//! use lsm::prelude::*;
//! # let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! # let y = vec![2.1, 3.9, 6.05, 7.9, 10.1];
//!
//! let fitter = Lsm::new()
//!     .precision(4)
//!     .save_to("lsm_report.txt")
//!     .build()?;
//!
//! let description = fitter.fit(&x, &y)?;
//! let lines = fitter.lines(&x, &y, Some(&description))?;
//! let text = fitter.report(&description)?;
//! # Result::<(), LsmError>::Ok(())
//! ```
//!
//! ## Logging
//!
//! Events are emitted through [`tracing`]: fit summaries at `DEBUG`, length
//! reconciliation, rejected input and degenerate input at `WARN`. Install any subscriber to
//! see them; nothing is printed otherwise.

// Layer 1: Primitives - error types.
mod primitives;

// Layer 3: Algorithms - OLS solver, bound lines, length reconciliation.
mod algorithms;

// Layer 4: Evaluation - text report.
mod evaluation;

// Layer 5: Engine - validation and orchestration.
mod engine;

// High-level fluent API.
pub mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        LsmBuilder as Lsm, LsmDescription, LsmError, LsmFitter, LsmLines,
        MismatchStrategy::{self, Fail, Truncate},
        ReportConfig, get_lsm_description, get_lsm_lines, get_report,
    };
}

// Lower layers for callers that need the individual building blocks.
pub mod internals {
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod primitives {
        pub use crate::primitives::*;
    }
}
