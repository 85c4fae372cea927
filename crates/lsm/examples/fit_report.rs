//! Least-squares fitting examples
//!
//! This example demonstrates:
//! - Basic fitting and the text report
//! - Reconciling measurements of different lengths
//! - Deriving the predicted and bound lines
//!
//! Fit summaries and warnings are printed through a `tracing-subscriber` at DEBUG.

use lsm::prelude::*;

fn main() -> Result<(), LsmError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    println!("{}", "=".repeat(80));
    println!("Least-Squares Line Fitting - Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_basic_fit()?;
    example_2_truncate()?;
    example_3_lines()?;

    Ok(())
}

/// Example 1: Basic Fit
fn example_1_basic_fit() -> Result<(), LsmError> {
    println!("Example 1: Basic Fit");
    println!("{}", "-".repeat(80));

    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let y = vec![2.1, 3.9, 6.05, 7.9, 10.1];

    let fitter = Lsm::new().build()?;
    let description = fitter.fit(&x, &y)?;
    println!("{}", fitter.report(&description)?);
    println!();

    Ok(())
}

/// Example 2: Mismatched lengths
fn example_2_truncate() -> Result<(), LsmError> {
    println!("Example 2: Mismatched Lengths");
    println!("{}", "-".repeat(80));

    let x = vec![0.0, 1.0, 2.0, 3.0];
    let y = vec![1.0, 2.9, 5.1, 7.0, 8.8, 11.2];

    match Lsm::new().build()?.fit(&x, &y) {
        Ok(_) => unreachable!("default strategy rejects mismatched lengths"),
        Err(e) => println!("Fail strategy: {e}"),
    }

    let fitter = Lsm::new().mismatch_strategy(Truncate).precision(4).build()?;
    let description = fitter.fit(&x, &y)?;
    println!("{}", fitter.report(&description)?);
    println!();

    Ok(())
}

/// Example 3: Predicted and bound lines
fn example_3_lines() -> Result<(), LsmError> {
    println!("Example 3: Lines");
    println!("{}", "-".repeat(80));

    let x: Vec<f64> = (0..8).map(|i| i as f64).collect();
    let y = vec![0.3, 2.2, 3.8, 6.4, 7.9, 10.1, 11.7, 14.2];

    let lines = Lsm::new().build()?.lines(&x, &y, None)?;

    println!(
        "{:>8} {:>10} {:>12} {:>12} {:>12}",
        "X", "Y", "Predicted", "Above", "Under"
    );
    println!("{:-<58}", "");
    for i in 0..lines.len() {
        println!(
            "{:>8.2} {:>10.3} {:>12.4} {:>12.4} {:>12.4}",
            lines.abscissa[i],
            lines.ordinates[i],
            lines.line_predicted[i],
            lines.line_above[i],
            lines.line_under[i]
        );
    }
    println!();

    Ok(())
}
