//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports everything needed for a
//! complete fit, line derivation and report without further imports.

use lsm::prelude::*;

/// Test that all prelude imports work correctly.
#[test]
fn test_prelude_imports() {
    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let y = vec![2.0, 4.0, 6.0, 8.0, 10.0];

    let fitter: LsmFitter<f64> = Lsm::new().build().unwrap();
    let description: LsmDescription<f64> = fitter.fit(&x, &y).unwrap();
    let lines: LsmLines<f64> = fitter.lines(&x, &y, Some(&description)).unwrap();

    assert_eq!(lines.len(), 5);
    assert!(fitter.report(&description).is_ok());
}

/// Test strategy variants are available unqualified.
#[test]
fn test_prelude_strategies() {
    let _ = Lsm::<f64>::new().mismatch_strategy(Fail);
    let _ = Lsm::<f64>::new().mismatch_strategy(Truncate);
    assert_eq!("cut".parse::<MismatchStrategy>(), Ok(Truncate));
}

/// Test free functions and configuration are available.
#[test]
fn test_prelude_functions() {
    let x = [1.0, 2.0, 3.0];
    let y = [2.0, 4.0, 6.5];

    let description = get_lsm_description(&x, &y, Fail).unwrap();
    assert!(get_lsm_lines(&x, &y, None).is_ok());
    assert!(get_report(&description, None).is_ok());
    assert_eq!(ReportConfig::default().precision, 3);
    assert!(matches!(
        get_lsm_description(&x, &y[..2], Truncate),
        Err(LsmError::InvalidInput(_))
    ));
}
