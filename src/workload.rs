//! Random request workloads.
//!
//! Generates reproducible request batches for benchmarking and comparing
//! policies outside hand-written examples.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Cylinder, DiskBounds};

/// Seeded generator of request batches inside a disk.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    bounds: DiskBounds,
    rng: StdRng,
}

impl WorkloadGenerator {
    /// Creates a generator for `bounds`, reproducible from `seed`.
    pub fn new(bounds: DiskBounds, seed: u64) -> Self {
        Self {
            bounds,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniformly distributed requests over the whole disk.
    pub fn uniform(&mut self, count: usize) -> Vec<Cylinder> {
        let (lo, hi) = self.range();
        (0..count).map(|_| self.rng.random_range(lo..=hi)).collect()
    }

    /// Requests clustered around `center`, each within `spread` cylinders.
    ///
    /// Values are clamped to the disk bounds.
    pub fn clustered(&mut self, count: usize, center: Cylinder, spread: Cylinder) -> Vec<Cylinder> {
        let (lo, hi) = self.range();
        let spread = spread.saturating_abs();
        (0..count)
            .map(|_| {
                let offset = self.rng.random_range(-spread..=spread);
                center.saturating_add(offset).clamp(lo, hi)
            })
            .collect()
    }

    /// A head position anywhere on the disk.
    pub fn head(&mut self) -> Cylinder {
        let (lo, hi) = self.range();
        self.rng.random_range(lo..=hi)
    }

    fn range(&self) -> (Cylinder, Cylinder) {
        (
            self.bounds.start.min(self.bounds.end),
            self.bounds.start.max(self.bounds.end),
        )
    }
}
