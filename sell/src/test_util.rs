//! Builders and dense references shared by the unit tests

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sell_core::{entry_offset, slice_count, slice_sets_from_lengths, SellIndex, SellValue};

use crate::dense::Dense;
use crate::executor::Executor;
use crate::matrix::{SlicedEllMatrix, SlicedEllParts};

/// Pack `(row, col, value)` triplets into a Sliced ELL matrix
///
/// Triplets keep their order within a row; duplicates are stored as
/// separate entries. Padding entries get value zero and column zero.
pub fn from_triplets<V: SellValue, I: SellIndex, const S: usize>(
    executor: Executor,
    num_rows: usize,
    num_cols: usize,
    triplets: &[(usize, usize, f64)],
) -> SlicedEllMatrix<V, I, S> {
    let mut rows: Vec<Vec<(usize, f64)>> = vec![Vec::new(); num_rows];
    for &(row, col, value) in triplets {
        rows[row].push((col, value));
    }

    let slices = slice_count(num_rows, S);
    let slice_lengths: Vec<usize> = (0..slices)
        .map(|s| {
            (s * S..((s + 1) * S).min(num_rows))
                .map(|r| rows[r].len())
                .max()
                .unwrap_or(0)
        })
        .collect();
    let slice_sets = slice_sets_from_lengths(&slice_lengths);
    let capacity = slice_lengths.iter().sum::<usize>() * S;

    let mut values = vec![V::zero(); capacity];
    let mut col_idxs = vec![I::from_usize(0).unwrap(); capacity];
    for (row, entries) in rows.iter().enumerate() {
        let slice = row / S;
        for (i, &(col, value)) in entries.iter().enumerate() {
            let offset = entry_offset(row % S, slice_sets[slice], i, S);
            values[offset] = V::from_f64(value);
            col_idxs[offset] = I::from_usize(col).unwrap();
        }
    }

    SlicedEllMatrix::from_parts(
        executor,
        SlicedEllParts {
            num_rows,
            num_cols,
            values,
            col_idxs,
            slice_lengths,
            slice_sets,
        },
    )
    .unwrap()
}

/// 3x3 matrix with slice size 2
///
/// ```text
/// [2 3 0]
/// [0 4 0]
/// [0 0 5]
/// ```
pub fn scenario_matrix(executor: Executor) -> SlicedEllMatrix<f64, i32, 2> {
    from_triplets(
        executor,
        3,
        3,
        &[(0, 0, 2.0), (0, 1, 3.0), (1, 1, 4.0), (2, 2, 5.0)],
    )
}

/// Random triplets with roughly `density` fill, some duplicated
pub fn random_triplets(
    rng: &mut StdRng,
    num_rows: usize,
    num_cols: usize,
    density: f64,
) -> Vec<(usize, usize, f64)> {
    let mut triplets = Vec::new();
    for row in 0..num_rows {
        for col in 0..num_cols {
            if rng.gen_bool(density) {
                triplets.push((row, col, rng.gen_range(-2.0..2.0)));
                if rng.gen_bool(0.05) {
                    triplets.push((row, col, rng.gen_range(-1.0..1.0)));
                }
            }
        }
    }
    triplets
}

/// Seeded RNG for reproducible tests
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Dense matrix reconstructed from triplets, duplicates summed
pub fn dense_from_triplets<V: SellValue>(
    num_rows: usize,
    num_cols: usize,
    triplets: &[(usize, usize, f64)],
) -> Dense<V> {
    let mut dense = Dense::zeros(Executor::Reference, num_rows, num_cols);
    for &(row, col, value) in triplets {
        *dense.at_mut(row, col) += V::from_f64(value);
    }
    dense
}

/// Random dense matrix
pub fn random_dense<V: SellValue>(
    rng: &mut StdRng,
    executor: Executor,
    num_rows: usize,
    num_cols: usize,
) -> Dense<V> {
    let values = (0..num_rows * num_cols)
        .map(|_| V::from_f64(rng.gen_range(-1.0..1.0)))
        .collect();
    Dense::from_row_major(executor, num_rows, num_cols, values).unwrap()
}

/// Plain triple-loop dense product
pub fn dense_product<V: SellValue>(a: &Dense<V>, b: &Dense<V>) -> Dense<V> {
    let mut c = Dense::zeros(Executor::Reference, a.num_rows(), b.num_cols());
    for row in 0..a.num_rows() {
        for k in 0..a.num_cols() {
            let a_rk = a.at(row, k);
            for col in 0..b.num_cols() {
                *c.at_mut(row, col) += a_rk * b.at(k, col);
            }
        }
    }
    c
}
