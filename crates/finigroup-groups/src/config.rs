//! Tuning knobs for group scans.

/// Configuration for the parallel identity, abelian and center scans.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Minimum group size to scan with rayon.
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 64,
        }
    }
}

impl ParallelConfig {
    /// A configuration that never goes parallel.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
        }
    }

    /// Returns true if a scan over `len` elements should run in parallel.
    #[must_use]
    pub fn is_parallel(&self, len: usize) -> bool {
        len >= self.parallel_threshold
    }
}
