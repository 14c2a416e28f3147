//! Configuration for the parallel host backend

/// How the parallel backend splits work across threads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParallelStrategy {
    /// One task per output row
    #[default]
    PerRow,
    /// One task per slice, iterating the slice's rows
    PerSlice,
}

/// Configuration for [`ParallelKernels`](crate::kernels::ParallelKernels)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParallelConfig {
    /// Work split strategy
    pub strategy: ParallelStrategy,
    /// Minimum number of rows handed to a single rayon task
    pub min_rows_per_task: usize,
}

impl ParallelConfig {
    /// Create config with the given strategy
    pub fn with_strategy(strategy: ParallelStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Set the work split strategy
    pub fn strategy(mut self, strategy: ParallelStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the minimum number of rows per task
    ///
    /// Zero is treated as one.
    pub fn with_min_rows_per_task(mut self, rows: usize) -> Self {
        self.min_rows_per_task = rows.max(1);
        self
    }

    /// Minimum number of rayon items per task for a given slice size
    ///
    /// Items are rows for [`ParallelStrategy::PerRow`] and slices for
    /// [`ParallelStrategy::PerSlice`].
    pub fn min_items_per_task(&self, slice_size: usize) -> usize {
        let rows = self.min_rows_per_task.max(1);
        match self.strategy {
            ParallelStrategy::PerRow => rows,
            ParallelStrategy::PerSlice => rows.div_ceil(slice_size.max(1)),
        }
    }
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            strategy: ParallelStrategy::PerRow,
            min_rows_per_task: 64,
        }
    }
}
