//! Activation Functions Example
//!
//! A single sigmoid layer trained for a few steps on a tiny dataset,
//! using only the matrix primitives.
//!
//! Run with: cargo run --example activation_functions

use dense_matrix::Matrix;

fn main() {
    println!("Sigmoid Activation Demo");
    println!("=======================\n");

    let input = Matrix::build(&[vec![-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0]])
        .expect("Example should not fail");
    print_row("x          ", &input);
    print_row("sigmoid(x) ", &input.sigmoid().expect("Example should not fail"));
    print_row("slope      ", &input.sigmoid_derivative().expect("Example should not fail"));

    println!("\nTraining a 3→1 sigmoid layer");
    println!("----------------------------");

    let inputs = Matrix::build(&[
        vec![0.0, 0.0, 1.0],
        vec![1.0, 1.0, 1.0],
        vec![1.0, 0.0, 1.0],
        vec![0.0, 1.0, 1.0],
    ])
    .expect("Example should not fail");
    let targets = Matrix::build(&[[0.0], [1.0], [1.0], [0.0]]).expect("Example should not fail");
    let mut weights = Matrix::random_seeded(3, 1, 1);
    let inputs_t = inputs.transpose().expect("Example should not fail");

    for step in 0..=1000 {
        let output = inputs.dot(&weights).expect("Example should not fail");
        let activated = output.sigmoid().expect("Example should not fail");
        let error = targets.subtract(&activated).expect("Example should not fail");
        let slope = output.sigmoid_derivative().expect("Example should not fail");
        let delta = error.multiply_cells(&slope).expect("Example should not fail");
        let adjustment = inputs_t.dot(&delta).expect("Example should not fail");
        weights = weights.add(&adjustment).expect("Example should not fail");

        if step % 250 == 0 {
            let loss = error.cells().iter().map(|e| e * e).sum::<f64>() / 4.0;
            println!("step {:4}  mse {:.6}", step, loss);
        }
    }

    let prediction = inputs
        .dot(&weights)
        .and_then(|m| m.sigmoid())
        .expect("Example should not fail");
    println!("\nPredictions:{}", prediction);
}

fn print_row(name: &str, output: &Matrix) {
    print!("{}", name);
    for &val in output.cells() {
        print!("| {:8.4} ", val);
    }
    println!("|");
}
