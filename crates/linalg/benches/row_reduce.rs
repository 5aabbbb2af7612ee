use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use linalg::matrix::Matrix;
use rand::Rng;

fn random_matrix(rows: usize, columns: usize) -> Matrix {
    let mut rng = rand::thread_rng();
    let vectors = (0..rows)
        .map(|_| (0..columns).map(|_| rng.gen_range(-100.0..100.0)).collect())
        .collect();
    Matrix::from_rows(vectors).unwrap()
}

fn row_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("row_reduce");
    for size in [4, 16, 64, 128] {
        let matrix = random_matrix(size, size + 1);
        group.bench_with_input(BenchmarkId::from_parameter(size), &matrix, |b, m| {
            b.iter_batched(
                || m.clone(),
                |mut m| m.row_reduce(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, row_reduce);
criterion_main!(benches);
