//! Saved run records.

use serde::{Deserialize, Serialize};

use crate::algorithms::Algorithm;
use crate::config::SimulationConfig;
use crate::models::{Cylinder, Direction};
use crate::simulator::Simulation;

/// A run waiting to be stored; the store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRun {
    /// User-facing label.
    pub name: String,
    /// Request list exactly as entered.
    pub requests: String,
    pub head: Cylinder,
    pub algorithm: Algorithm,
    pub direction: Direction,
    pub disk_start: Cylinder,
    pub disk_end: Cylinder,
    /// Seek time per cylinder (ms).
    pub seek_ms: f64,
    pub total_movement: Cylinder,
    pub avg_seek: f64,
    pub throughput: f64,
}

impl NewRun {
    /// Snapshots a finished simulation.
    ///
    /// A missing or blank `name` defaults to `"<ALGORITHM>_run"`.
    pub fn from_simulation(
        simulation: &Simulation,
        config: &SimulationConfig,
        requests_text: &str,
        name: Option<&str>,
    ) -> Self {
        let name = match name.map(str::trim) {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => format!("{}_run", simulation.algorithm),
        };
        Self {
            name,
            requests: requests_text.to_string(),
            head: config.head,
            algorithm: simulation.algorithm,
            direction: config.direction,
            disk_start: config.bounds.start,
            disk_end: config.bounds.end,
            seek_ms: config.seek_time_ms,
            total_movement: simulation.metrics.total_head_movement,
            avg_seek: simulation.metrics.average_seek_distance,
            throughput: simulation.metrics.throughput,
        }
    }

    /// Completes the record with store-assigned fields.
    pub fn into_record(self, id: u64, timestamp: impl Into<String>) -> RunRecord {
        RunRecord {
            id,
            name: self.name,
            requests: self.requests,
            head: self.head,
            algorithm: self.algorithm,
            direction: self.direction,
            disk_start: self.disk_start,
            disk_end: self.disk_end,
            seek_ms: self.seek_ms,
            total_movement: self.total_movement,
            avg_seek: self.avg_seek,
            throughput: self.throughput,
            timestamp: timestamp.into(),
        }
    }
}

/// A stored run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Auto-incremented identifier, starting at 1.
    pub id: u64,
    pub name: String,
    pub requests: String,
    pub head: Cylinder,
    pub algorithm: Algorithm,
    pub direction: Direction,
    pub disk_start: Cylinder,
    pub disk_end: Cylinder,
    pub seek_ms: f64,
    pub total_movement: Cylinder,
    pub avg_seek: f64,
    pub throughput: f64,
    /// Store-assigned time, `YYYY-MM-DD HH:MM:SS` (UTC).
    pub timestamp: String,
}
