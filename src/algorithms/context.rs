//! Policy parameters for sweeping schedulers.

use serde::{Deserialize, Serialize};

use crate::models::{Direction, DiskBounds};

/// Parameters consulted by direction- and bounds-aware policies.
///
/// FCFS and SSTF ignore both fields. LOOK and C-LOOK use only the
/// direction; SCAN and C-SCAN also need the disk bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepContext {
    /// Initial sweep direction.
    pub direction: Direction,
    /// Addressable cylinder range.
    pub bounds: DiskBounds,
}

impl SweepContext {
    /// Creates a context sweeping right over `0..=199`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sweep direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the disk bounds.
    pub fn with_bounds(mut self, bounds: DiskBounds) -> Self {
        self.bounds = bounds;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let ctx = SweepContext::new()
            .with_direction(Direction::Left)
            .with_bounds(DiskBounds::new(10, 500));
        assert_eq!(ctx.direction, Direction::Left);
        assert_eq!(ctx.bounds.end, 500);
        assert_eq!(SweepContext::new().bounds, DiskBounds::new(0, 199));
    }
}
