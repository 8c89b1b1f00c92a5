//! Simulation configuration.

use serde::{Deserialize, Serialize};

use crate::algorithms::SweepContext;
use crate::models::{Cylinder, Direction, DiskBounds};

/// Run parameters shared by every policy in a simulation.
///
/// Defaults follow the classic textbook setup: head at cylinder 50, sweeping
/// right over a 200-cylinder disk, 1 ms per cylinder. Missing fields fall
/// back to these defaults when deserializing.
///
/// # Example
/// ```
/// use u_disk_schedule::config::SimulationConfig;
/// use u_disk_schedule::models::Direction;
///
/// let config = SimulationConfig::new()
///     .with_head(53)
///     .with_direction(Direction::Left)
///     .with_seek_time_ms(0.5);
/// assert_eq!(config.bounds.end, 199);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Starting head position.
    pub head: Cylinder,
    /// Initial sweep direction.
    pub direction: Direction,
    /// Addressable cylinder range.
    pub bounds: DiskBounds,
    /// Time to move one cylinder (ms).
    pub seek_time_ms: f64,
}

impl SimulationConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the starting head position.
    pub fn with_head(mut self, head: Cylinder) -> Self {
        self.head = head;
        self
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

    /// Sets the seek time per cylinder (ms).
    pub fn with_seek_time_ms(mut self, seek_time_ms: f64) -> Self {
        self.seek_time_ms = seek_time_ms;
        self
    }

    /// Policy parameters derived from this configuration.
    pub fn sweep_context(&self) -> SweepContext {
        SweepContext::new()
            .with_direction(self.direction)
            .with_bounds(self.bounds)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            head: 50,
            direction: Direction::Right,
            bounds: DiskBounds::default(),
            seek_time_ms: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::new();
        assert_eq!(config.head, 50);
        assert_eq!(config.direction, Direction::Right);
        assert_eq!(config.bounds, DiskBounds::new(0, 199));
        assert!((config.seek_time_ms - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_sweep_context() {
        let config = SimulationConfig::new()
            .with_direction(Direction::Left)
            .with_bounds(DiskBounds::new(0, 4999));
        let ctx = config.sweep_context();
        assert_eq!(ctx.direction, Direction::Left);
        assert_eq!(ctx.bounds.end, 4999);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SimulationConfig =
            serde_json::from_str(r#"{"head": 53, "direction": "left"}"#).unwrap();
        assert_eq!(config.head, 53);
        assert_eq!(config.direction, Direction::Left);
        assert_eq!(config.bounds, DiskBounds::default());
        assert!((config.seek_time_ms - 1.0).abs() < 1e-10);
    }
}
