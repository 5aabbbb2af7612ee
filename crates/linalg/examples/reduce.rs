use linalg::matrix::{Matrix, PivotSet};
use rand::Rng;

fn main() -> std::io::Result<()> {
    let m = query::with_default("Rows", "6", positive)?;
    let n = query::with_default("Columns", "7", positive)?;

    let mut matrix = random_matrix(m, n);

    // Print original matrix if not too large
    let print_matrices = m <= 10 && n <= 10;
    if print_matrices {
        println!("{matrix}");
    } else {
        println!("Matrix too large to display ({m} x {n})");
    }

    let start = std::time::Instant::now();
    println!(
        "Row-reducing the matrix on {} thread(s)...",
        maybe_rayon::current_num_threads()
    );
    let rank = matrix.row_reduce();
    println!("Row reduction completed in {:.2?}", start.elapsed());

    println!("\nRow-reduced matrix (rank {rank}):");
    if print_matrices {
        println!("{matrix}");
    }
    let pivots = PivotSet::classify(&matrix);
    println!("Leading variables: {:?}", pivots.lead_vars());
    println!("Free variables: {:?}", pivots.free_vars());
    println!("Consistent: {}", matrix.is_consistent());
    Ok(())
}

fn positive(n: usize) -> Result<usize, String> {
    if n == 0 {
        Err("matrix dimensions must be positive".to_string())
    } else {
        Ok(n)
    }
}

fn random_matrix(rows: usize, columns: usize) -> Matrix {
    let mut rng = rand::thread_rng();
    let vectors = (0..rows)
        .map(|_| (0..columns).map(|_| f64::from(rng.gen_range(-9..=9))).collect())
        .collect();
    Matrix::from_rows(vectors).unwrap()
}
