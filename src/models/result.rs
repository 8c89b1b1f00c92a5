//! Scheduler output.

use serde::{Deserialize, Serialize};

use super::{Cylinder, HeadPath};

/// Result of running one scheduling policy over a request set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Policy name (e.g., "SCAN").
    pub algorithm: String,
    /// Serviced requests in order; excludes boundary visits.
    pub order: Vec<Cylinder>,
    /// Full head path, including synthetic visits.
    pub path: HeadPath,
    /// Head movement accumulated by the policy while seeking, excluding
    /// return jumps.
    pub total_movement: Cylinder,
}

impl ScheduleResult {
    /// Packages a finished path with the movement the policy accumulated.
    ///
    /// The service order is read off the path's request visits.
    pub fn new(algorithm: impl Into<String>, path: HeadPath, total_movement: Cylinder) -> Self {
        Self {
            algorithm: algorithm.into(),
            order: path.service_order(),
            path,
            total_movement,
        }
    }

    /// Visited cylinders, starting with the head.
    pub fn positions(&self) -> Vec<Cylinder> {
        self.path.positions()
    }

    /// Number of serviced requests.
    pub fn serviced_count(&self) -> usize {
        self.order.len()
    }
}
