//! Run the same Sliced ELL product on every host executor

use sell::{
    Dense, Executor, ParallelConfig, ParallelStrategy, Result, SlicedEllMatrix, SlicedEllParts,
};
use std::time::Instant;

fn main() -> Result<()> {
    // 3x3 with slice size 2
    // [2 3 0]
    // [0 4 0]
    // [0 0 5]
    let parts = SlicedEllParts {
        num_rows: 3,
        num_cols: 3,
        values: vec![2.0, 4.0, 3.0, 0.0, 5.0, 0.0],
        col_idxs: vec![0, 1, 1, 0, 2, 0],
        slice_lengths: vec![2, 1],
        slice_sets: vec![0, 2],
    };

    let executors = [
        Executor::Reference,
        Executor::Parallel(ParallelConfig::default()),
        Executor::Parallel(ParallelConfig::with_strategy(ParallelStrategy::PerSlice)),
    ];

    for executor in executors {
        let a = SlicedEllMatrix::<f64, i32, 2>::from_parts(executor, parts.clone())?;
        let x = Dense::from_row_major(executor, 3, 1, vec![1.0, 2.0, 3.0])?;
        let mut y = Dense::zeros(executor, 3, 1);

        let start = Instant::now();
        a.apply(&x, &mut y)?;
        let elapsed = start.elapsed();
        println!("{executor}: y = {:?} in {elapsed:?}", y.to_row_major_vec());

        let alpha = Dense::scalar(executor, 2.0);
        let beta = Dense::scalar(executor, 0.5);
        a.apply_scaled(&alpha, &x, &beta, &mut y)?;
        println!("{executor}: 2*A*x + 0.5*y = {:?}", y.to_row_major_vec());

        println!("{executor}: dense = {:?}", a.to_dense()?.to_row_major_vec());
    }

    Ok(())
}
