//! Approximate Comparison Examples
//!
//! This example demonstrates:
//! - Squaring integers and floats
//! - Scalar comparison with explicit and default tolerances
//! - Element-wise comparison of sequences
//! - Validated comparisons with a full mismatch report

use numutils::prelude::*;

fn main() -> Result<(), NumUtilsError> {
    println!("{}", "=".repeat(60));
    println!("numutils - Approximate Comparison Examples");
    println!("{}", "=".repeat(60));
    println!();

    example_1_square();
    example_2_scalars();
    example_3_sequences();
    example_4_report()?;

    Ok(())
}

fn example_1_square() {
    println!("Example 1: Squaring");
    println!("  square(-5)  = {}", square(-5));
    println!("  square(12)  = {}", square(12));
    println!("  square(1.5) = {}", square(1.5));
    println!();
}

fn example_2_scalars() {
    println!("Example 2: Scalar comparison");
    println!("  default f64 tolerance: {}", default_tolerance::<f64>());
    println!("  default f32 tolerance: {}", default_tolerance::<f32>());
    println!(
        "  approx_equal(1.0001, 1, 1e-4) = {}",
        approx_equal(1.0001, 1.0, 1e-4)
    );
    println!(
        "  approx_equal(1.0001, 1, 1e-5) = {}",
        approx_equal(1.0001, 1.0, 1e-5)
    );
    println!(
        "  approx_equal_default(0.1 + 0.2, 0.3) = {}",
        approx_equal_default(0.1 + 0.2, 0.3)
    );
    println!();
}

fn example_3_sequences() {
    let v1 = [1.0, 2.0, 3.0];
    let v2 = [1.1, 2.1, 3.1];

    println!("Example 3: Element-wise comparison");
    println!("  v1 = {:?}", v1);
    println!("  v2 = {:?}", v2);
    println!(
        "  tolerance 0.15: {}",
        elements_approx_equal(&v1, &v2, 0.15)
    );
    println!(
        "  default:        {}",
        elements_approx_equal_default(&v1, &v2)
    );
    println!();
}

fn example_4_report() -> Result<(), NumUtilsError> {
    let expected = [0.0, 0.5, 1.0, 1.5, 2.0, f64::NAN];
    let observed = [0.0, 0.51, 1.0, 1.2, 2.0, f64::NAN];

    println!("Example 4: Validated comparison report");
    let cmp = Approx::new().tolerance(0.05).nan_equal().build()?;
    let report = cmp.compare(&expected, &observed)?;
    println!("{}", report);

    match cmp.elements_approx_eq(&expected, &observed[..3]) {
        Ok(equal) => println!("  equal: {}", equal),
        Err(e) => println!("  error: {}", e),
    }

    Ok(())
}
