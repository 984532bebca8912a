use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dense_matrix::Matrix;

fn patterned(rows: usize, cols: usize, stride: usize) -> Matrix {
    let mut m = Matrix::zeros(rows, cols);
    for i in 0..rows {
        for j in 0..cols {
            m.set_at(i, j, ((i * cols + j) * stride % 100) as f64);
        }
    }
    m
}

fn bench_dot_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot");

    let sizes = vec![(16, 16, 16), (32, 32, 32), (64, 64, 64), (128, 128, 128)];

    for (m, n, p) in sizes {
        let id = format!("{}x{}_x_{}x{}", m, n, n, p);
        let a = patterned(m, n, 1);
        let b = patterned(n, p, 2);

        group.bench_with_input(
            BenchmarkId::from_parameter(&id),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| {
                    let result = black_box(a).dot(black_box(b)).unwrap();
                    black_box(result);
                });
            },
        );
    }

    group.finish();
}

fn bench_dot_rectangular(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot_rectangular");

    // Typical layer shapes: batch x inputs @ inputs x hidden
    let shapes = vec![(32, 128, 64), (64, 256, 32), (1, 784, 128)];

    for (m, n, p) in shapes {
        let id = format!("{}x{}_x_{}x{}", m, n, n, p);
        let a = patterned(m, n, 1);
        let b = patterned(n, p, 3);

        group.bench_with_input(
            BenchmarkId::from_parameter(&id),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| {
                    let result = black_box(a).dot(black_box(b)).unwrap();
                    black_box(result);
                });
            },
        );
    }

    group.finish();
}

fn bench_transpose(c: &mut Criterion) {
    let mut group = c.benchmark_group("transpose");

    let sizes = vec![(64, 64), (128, 128), (256, 256), (128, 256)];

    for (rows, cols) in sizes {
        let id = format!("{}x{}", rows, cols);
        let m = patterned(rows, cols, 1);

        group.bench_with_input(BenchmarkId::from_parameter(&id), &m, |bench, m| {
            bench.iter(|| {
                let result = black_box(m).transpose().unwrap();
                black_box(result);
            });
        });
    }

    group.finish();
}

fn bench_vector_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_multiply");

    let sizes = vec![(64, 64), (128, 128), (256, 256)];

    for (rows, cols) in sizes {
        let id = format!("{}x{}_x_{}", rows, cols, cols);
        let m = patterned(rows, cols, 1);
        let v: Vec<f64> = (0..cols).map(|i| (i % 100) as f64).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(&id),
            &(&m, &v),
            |bench, (m, v)| {
                bench.iter(|| {
                    let result = black_box(m).vector_multiply(black_box(v)).unwrap();
                    black_box(result);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_dot_sizes,
    bench_dot_rectangular,
    bench_transpose,
    bench_vector_multiply
);
criterion_main!(benches);
