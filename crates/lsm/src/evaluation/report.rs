//! Plain-text report of a least-squares fit.
//!
//! ## Purpose
//!
//! This module renders a fit description as a delimited text block and can
//! persist it to a file.
//!
//! ## Design notes
//!
//! * **Explicit configuration**: Precision and destination travel in a
//!   [`ReportConfig`] value instead of process-wide state.
//! * **Overwrite**: An existing file at the destination is replaced.
//!
//! ## Non-goals
//!
//! * This module does not produce structured (JSON, CSV) output.

// External dependencies
use core::fmt::{Display, Formatter};
use num_traits::Float;
use std::fs;
use std::path::{Path, PathBuf};

// Internal dependencies
use crate::algorithms::regression::LsmDescription;
use crate::primitives::errors::{LsmError, Result};

/// Number of decimal digits printed when nothing else is configured.
pub const DEFAULT_PRECISION: usize = 3;

const TITLE: &str = "LSM computing result";
const RULE_HALF: usize = 40;
const RULE_FULL: usize = 100;

// ============================================================================
// Report Configuration
// ============================================================================

/// How a report is rendered and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Decimal digits printed for each value.
    pub precision: usize,

    /// File the report is written to, if any.
    pub path: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            path: None,
        }
    }
}

impl ReportConfig {
    /// Report rendered with the given precision and not saved.
    pub fn with_precision(precision: usize) -> Self {
        Self {
            precision,
            path: None,
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render the report block for `description`.
pub fn render<T: Float + Display>(description: &LsmDescription<T>, precision: usize) -> String {
    let rule = "=".repeat(RULE_HALF);
    let lines = [
        format!("{rule}{TITLE}{rule}\n"),
        format!("[INFO]: incline: {:.precision$};", description.incline),
        format!("[INFO]: shift: {:.precision$};", description.shift),
        format!(
            "[INFO]: incline error: {:.precision$};",
            description.incline_error
        ),
        format!("[INFO]: shift error: {:.precision$};", description.shift_error),
        format!("\n{}", "=".repeat(RULE_FULL)),
    ];
    lines.join("\n")
}

/// Write `text` to `path`, replacing any existing content.
pub fn save(text: &str, path: &Path) -> Result<()> {
    fs::write(path, text).map_err(|e| LsmError::ReportWrite {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "report saved");
    Ok(())
}

/// Render the report and, when `config.path` is set, save it there.
///
/// The rendered text is returned in both cases.
pub fn report<T: Float + Display>(
    description: &LsmDescription<T>,
    config: &ReportConfig,
) -> Result<String> {
    let text = render(description, config.precision);
    if let Some(path) = &config.path {
        save(&text, path)?;
    }
    Ok(text)
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for LsmDescription<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(&render(self, DEFAULT_PRECISION))
    }
}
