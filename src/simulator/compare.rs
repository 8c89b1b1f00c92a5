//! Side-by-side comparison of all policies.

use serde::{Deserialize, Serialize};

use super::Simulation;
use crate::algorithms::Algorithm;
use crate::export::CsvTable;
use crate::models::Cylinder;

/// Summary line of one policy in a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub algorithm: Algorithm,
    pub total_movement: Cylinder,
    pub average_seek_distance: f64,
    pub throughput: f64,
}

/// Results of every policy over the same input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    runs: Vec<Simulation>,
}

impl Comparison {
    /// Wraps a set of runs, kept in the given order.
    pub fn new(runs: Vec<Simulation>) -> Self {
        Self { runs }
    }

    /// Runs in execution order.
    pub fn runs(&self) -> &[Simulation] {
        &self.runs
    }

    /// The run for a specific policy.
    pub fn get(&self, algorithm: Algorithm) -> Option<&Simulation> {
        self.runs.iter().find(|r| r.algorithm == algorithm)
    }

    /// Runs sorted by total head movement, ascending.
    ///
    /// Ties keep execution order.
    pub fn ranked(&self) -> Vec<&Simulation> {
        let mut ranked: Vec<&Simulation> = self.runs.iter().collect();
        ranked.sort_by_key(|r| r.metrics.total_head_movement);
        ranked
    }

    /// The policy with the least head movement.
    pub fn best(&self) -> Option<&Simulation> {
        self.ranked().first().copied()
    }

    /// Summary rows, ranked by total movement.
    pub fn rows(&self) -> Vec<ComparisonRow> {
        self.ranked()
            .into_iter()
            .map(|r| ComparisonRow {
                algorithm: r.algorithm,
                total_movement: r.metrics.total_head_movement,
                average_seek_distance: r.metrics.average_seek_distance,
                throughput: r.metrics.throughput,
            })
            .collect()
    }

    /// Ranked summary as a CSV table.
    pub fn to_csv(&self) -> String {
        let mut table = CsvTable::new(&["Algorithm", "TotalMovement", "AvgSeek", "Throughput"]);
        for row in self.rows() {
            table.push_row(&[
                row.algorithm.to_string(),
                row.total_movement.to_string(),
                row.average_seek_distance.to_string(),
                row.throughput.to_string(),
            ]);
        }
        table.finish()
    }
}
