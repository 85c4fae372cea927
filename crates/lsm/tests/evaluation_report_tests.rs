//! Tests for report rendering and persistence.
//!
//! These tests verify:
//! - The exact layout of the text block
//! - Precision handling
//! - Saving to disk with overwrite semantics
//!
//! ## Test Organization
//!
//! 1. **Rendering** - Layout and precision
//! 2. **Persistence** - Files, overwrite, errors

use std::fs;

use lsm::internals::algorithms::regression::LsmDescription;
use lsm::internals::evaluation::report::{DEFAULT_PRECISION, ReportConfig, render, report};
use lsm::internals::primitives::errors::LsmError;

// ============================================================================
// Helper Functions
// ============================================================================

fn description() -> LsmDescription<f64> {
    LsmDescription {
        incline: 1.99512,
        shift: 0.0604,
        incline_error: 0.03741657,
        shift_error: 0.1240967,
    }
}

fn expected_report() -> String {
    let rule = "=".repeat(40);
    format!(
        "{rule}LSM computing result{rule}\n\n\
         [INFO]: incline: 1.995;\n\
         [INFO]: shift: 0.060;\n\
         [INFO]: incline error: 0.037;\n\
         [INFO]: shift error: 0.124;\n\n\
         {}",
        "=".repeat(100)
    )
}

// ============================================================================
// Rendering Tests
// ============================================================================

/// Test exact report layout with the default precision.
#[test]
fn test_render_layout() {
    assert_eq!(DEFAULT_PRECISION, 3);
    assert_eq!(render(&description(), DEFAULT_PRECISION), expected_report());
}

/// Test the header and footer rules.
#[test]
fn test_render_rules() {
    let text = render(&description(), 3);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0].len(), 100);
    assert!(lines[0].starts_with("========================================LSM"));
    assert_eq!(lines[1], "");
    assert_eq!(lines[6], "");
    assert_eq!(lines[7], "=".repeat(100));
    assert!(!text.ends_with('\n'));
}

/// Test custom precision.
#[test]
fn test_render_precision() {
    let text = render(&description(), 1);
    assert!(text.contains("[INFO]: incline: 2.0;"));
    assert!(text.contains("[INFO]: shift error: 0.1;"));

    let text = render(&description(), 5);
    assert!(text.contains("[INFO]: incline: 1.99512;"));
    assert!(text.contains("[INFO]: shift: 0.06040;"));
}

/// Test Display uses the default precision.
#[test]
fn test_display_matches_render() {
    assert_eq!(description().to_string(), expected_report());
}

// ============================================================================
// Persistence Tests
// ============================================================================

/// Test report without a path only returns the text.
#[test]
fn test_report_without_path() {
    let text = report(&description(), &ReportConfig::default()).unwrap();
    assert_eq!(text, expected_report());
}

/// Test report is written and overwrites previous content.
#[test]
fn test_report_saves_and_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.txt");
    fs::write(&path, "stale content that is much longer than nothing at all").unwrap();

    let config = ReportConfig {
        precision: 3,
        path: Some(path.clone()),
    };
    let text = report(&description(), &config).unwrap();

    assert_eq!(text, expected_report());
    assert_eq!(fs::read_to_string(&path).unwrap(), text);
}

/// Test an unwritable destination surfaces ReportWrite.
#[test]
fn test_report_write_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("report.txt");

    let config = ReportConfig {
        precision: 3,
        path: Some(path),
    };
    let res = report(&description(), &config);

    assert!(matches!(res, Err(LsmError::ReportWrite { .. })));
}
