//! Reference vs parallel Sliced ELL kernels on a banded matrix

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sell::{
    entry_offset, slice_count, Dense, Executor, ParallelConfig, ParallelKernels, ParallelStrategy,
    ReferenceKernels, SlicedEllKernels, SlicedEllMatrix, SlicedEllParts, DEFAULT_SLICE_SIZE,
};

const S: usize = DEFAULT_SLICE_SIZE;

/// Banded matrix with `band` entries per row
fn banded(n: usize, band: usize, rng: &mut StdRng) -> SlicedEllMatrix<f64, i32> {
    let slices = slice_count(n, S);
    let slice_lengths = vec![band; slices];
    let slice_sets: Vec<usize> = (0..slices).map(|s| s * band).collect();
    let capacity = slices * band * S;

    let mut values = vec![0.0; capacity];
    let mut col_idxs = vec![0i32; capacity];
    for row in 0..n {
        let (slice, local) = (row / S, row % S);
        for i in 0..band {
            let offset = entry_offset(local, slice_sets[slice], i, S);
            values[offset] = rng.gen_range(-1.0..1.0);
            col_idxs[offset] = ((row + i) % n) as i32;
        }
    }

    SlicedEllMatrix::from_parts(
        Executor::Reference,
        SlicedEllParts {
            num_rows: n,
            num_cols: n,
            values,
            col_idxs,
            slice_lengths,
            slice_sets,
        },
    )
    .expect("valid banded layout")
}

fn bench_spmv(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("sliced_ell_spmv");

    for &n in &[10_000usize, 100_000] {
        let a = banded(n, 16, &mut rng);
        let x = Dense::from_row_major(
            Executor::Reference,
            n,
            4,
            (0..n * 4).map(|_| rng.gen_range(-1.0..1.0)).collect(),
        )
        .expect("valid dense operand");
        let mut y = Dense::zeros(Executor::Reference, n, 4);

        group.bench_with_input(BenchmarkId::new("reference", n), &n, |bench, _| {
            bench.iter(|| ReferenceKernels.spmv(black_box(&a), black_box(&x), &mut y))
        });

        let per_row = ParallelKernels::new(ParallelConfig::default());
        group.bench_with_input(BenchmarkId::new("parallel_per_row", n), &n, |bench, _| {
            bench.iter(|| per_row.spmv(black_box(&a), black_box(&x), &mut y))
        });

        let per_slice =
            ParallelKernels::new(ParallelConfig::with_strategy(ParallelStrategy::PerSlice));
        group.bench_with_input(BenchmarkId::new("parallel_per_slice", n), &n, |bench, _| {
            bench.iter(|| per_slice.spmv(black_box(&a), black_box(&x), &mut y))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_spmv);
criterion_main!(benches);
