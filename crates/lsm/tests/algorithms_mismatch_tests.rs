//! Tests for length mismatch reconciliation.
//!
//! These tests verify:
//! - `Fail` rejects differing lengths
//! - `Truncate` keeps the common prefix of both sequences
//! - Parsing strategies from text and flags
//!
//! ## Test Organization
//!
//! 1. **Fail** - Rejection and error context
//! 2. **Truncate** - Prefix preservation, caller data untouched
//! 3. **Parsing** - `FromStr`, `from_u8`, `Display`

use lsm::internals::algorithms::mismatch::MismatchStrategy;
use lsm::internals::primitives::errors::LsmError;

// ============================================================================
// Fail Tests
// ============================================================================

/// Test default strategy is Fail.
#[test]
fn test_default_is_fail() {
    assert_eq!(MismatchStrategy::default(), MismatchStrategy::Fail);
}

/// Test Fail rejects both orders of mismatch.
#[test]
fn test_fail_rejects_mismatch() {
    let short = vec![1.0, 2.0, 3.0];
    let long = vec![1.0, 2.0, 3.0, 4.0, 5.0];

    assert_eq!(
        MismatchStrategy::Fail.resolve(&short, &long),
        Err(LsmError::LengthMismatch { x_len: 3, y_len: 5 })
    );
    assert_eq!(
        MismatchStrategy::Fail.resolve(&long, &short),
        Err(LsmError::LengthMismatch { x_len: 5, y_len: 3 })
    );
}

// ============================================================================
// Truncate Tests
// ============================================================================

/// Test truncating longer ordinates.
#[test]
fn test_truncate_longer_ordinates() {
    let x = vec![1.0, 2.0, 3.0];
    let y = vec![1.0, 2.0, 3.0, 4.0];

    let (rx, ry) = MismatchStrategy::Truncate.resolve(&x, &y).unwrap();

    assert_eq!(rx, vec![1.0, 2.0, 3.0]);
    assert_eq!(ry, vec![1.0, 2.0, 3.0]);
}

/// Test truncating longer abscissa.
#[test]
fn test_truncate_longer_abscissa() {
    let x = vec![5.0, 4.0, 3.0, 2.0, 1.0, 0.0];
    let y = vec![9.0, 8.0, 7.0, 6.0];

    let (rx, ry) = MismatchStrategy::Truncate.resolve(&x, &y).unwrap();

    assert_eq!(rx, vec![5.0, 4.0, 3.0, 2.0]);
    assert_eq!(ry, y);
}

/// Test resolved sequences are prefixes of the inputs for many shapes.
#[test]
fn test_truncate_keeps_prefixes() {
    for (nx, ny) in [(3, 7), (7, 3), (4, 5), (10, 4), (3, 3)] {
        let x: Vec<f64> = (0..nx).map(|i| i as f64 * 0.5).collect();
        let y: Vec<f64> = (0..ny).map(|i| 10.0 - i as f64).collect();

        let (rx, ry) = MismatchStrategy::Truncate.resolve(&x, &y).unwrap();
        let n = nx.min(ny);

        assert_eq!(rx.len(), n);
        assert_eq!(ry.len(), n);
        assert_eq!(&rx[..], &x[..n]);
        assert_eq!(&ry[..], &y[..n]);
    }
}

/// Test caller data is not modified.
#[test]
fn test_truncate_does_not_mutate_input() {
    let x = vec![1.0, 2.0, 3.0];
    let y = vec![1.0, 2.0, 3.0, 4.0];

    let _ = MismatchStrategy::Truncate.resolve(&x, &y).unwrap();

    assert_eq!(y.len(), 4);
    assert_eq!(x.len(), 3);
}

// ============================================================================
// Parsing Tests
// ============================================================================

/// Test parsing from text.
#[test]
fn test_parse_strategy() {
    assert_eq!("fail".parse::<MismatchStrategy>(), Ok(MismatchStrategy::Fail));
    assert_eq!("FALL".parse::<MismatchStrategy>(), Ok(MismatchStrategy::Fail));
    assert_eq!(" Truncate ".parse::<MismatchStrategy>(), Ok(MismatchStrategy::Truncate));
    assert_eq!("cut".parse::<MismatchStrategy>(), Ok(MismatchStrategy::Truncate));
}

/// Test unknown strategies are rejected.
#[test]
fn test_parse_unknown_strategy() {
    let res: Result<MismatchStrategy, _> = "interpolate".parse();
    assert_eq!(
        res,
        Err(LsmError::UnknownStrategy("interpolate".to_string()))
    );

    assert!(matches!(
        MismatchStrategy::from_u8(7),
        Err(LsmError::UnknownStrategy(_))
    ));
}

/// Test flag round trip and display names.
#[test]
fn test_flags_and_names() {
    for s in [MismatchStrategy::Fail, MismatchStrategy::Truncate] {
        assert_eq!(MismatchStrategy::from_u8(s.to_u8()), Ok(s));
        assert_eq!(s.to_string().parse::<MismatchStrategy>(), Ok(s));
    }
    assert_eq!(MismatchStrategy::Truncate.to_string(), "truncate");
}
