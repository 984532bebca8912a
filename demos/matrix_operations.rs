//! Matrix Operations Example
//!
//! Demonstrates:
//! - Matrix construction (build, zeros, identity)
//! - Elementwise arithmetic
//! - Matrix multiplication (dot) and transpose
//! - Matrix-vector multiplication
//! - Failure modes
//!
//! Run with: cargo run --example matrix_operations

use dense_matrix::{Matrix, MatrixConfig};

fn main() {
    println!("Dense Matrix Operations Demo");
    println!("============================\n");

    // ========================================================================
    // Matrix Construction
    // ========================================================================
    println!("Matrix Construction");
    println!("-------------------");

    let m1 = Matrix::build(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])
        .expect("Example should not fail");
    println!("Matrix m1 (2×3):{}", m1);
    println!("Packed storage: {:?}\n", m1.as_packed());

    let ragged =
        Matrix::build(&[vec![1.0, 2.0, 3.0], vec![4.0]]).expect("Example should not fail");
    println!("Ragged rows are zero-padded:{}", ragged);

    println!("Identity matrix I₃:{}", Matrix::identity(3));
    println!("Zero matrix 0₃ₓ₂:{}", Matrix::zeros(3, 2));

    // ========================================================================
    // Elementwise Arithmetic
    // ========================================================================
    println!("Elementwise Arithmetic");
    println!("----------------------");

    let ones = Matrix::build(&[vec![1.0, 1.0, 1.0], vec![1.0, 1.0, 1.0]])
        .expect("Example should not fail");
    println!("m1 + 1:{}", m1.add(&ones).expect("Example should not fail"));
    println!("m1 * 0.5:{}", m1.scalar_multiply(0.5).expect("Example should not fail"));
    println!("m1 ∘ m1:{}", m1.multiply_cells(&m1).expect("Example should not fail"));

    // ========================================================================
    // Matrix Multiplication
    // ========================================================================
    println!("Matrix Multiplication (dot)");
    println!("---------------------------");

    let b = Matrix::build(&[vec![10.0, 11.0], vec![12.0, 13.0], vec![14.0, 15.0]])
        .expect("Example should not fail");
    let c = m1.dot(&b).expect("Example should not fail");
    println!("m1 × B (2×2):{}", c);
    println!("  C[0,0] = 1×10 + 2×12 + 3×14 = 76");
    println!("  C[1,1] = 4×11 + 5×13 + 6×15 = 199\n");

    // ========================================================================
    // Transpose
    // ========================================================================
    println!("Matrix Transpose");
    println!("----------------");

    let t = m1.transpose().expect("Example should not fail");
    println!("m1ᵀ (3×2):{}", t);

    // ========================================================================
    // Matrix-Vector Multiplication
    // ========================================================================
    println!("Matrix-Vector Multiplication");
    println!("----------------------------");

    let v = [7.0, 8.0, 9.0];
    let result = m1.vector_multiply(&v).expect("Example should not fail");
    println!("m1 × {:?} = {:?}\n", v, result);

    // ========================================================================
    // Failure Modes
    // ========================================================================
    println!("Failure Modes");
    println!("-------------");

    match m1.dot(&m1) {
        Ok(_) => println!("unexpected success"),
        Err(err) => println!("Recoverable: {}", err),
    }

    let config = MatrixConfig::from_env();
    println!("Failure mode from environment: {:?}", config.failure_mode);
    match m1.get_row_with(5, &config) {
        Ok(row) => println!("row 5: {:?}", row),
        Err(err) => println!("Recoverable: {}", err),
    }
}
