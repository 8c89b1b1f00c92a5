//! Single-policy simulation runner.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::Comparison;
use crate::algorithms::Algorithm;
use crate::config::SimulationConfig;
use crate::error::{Error, Result};
use crate::metrics::SeekMetrics;
use crate::models::{Cylinder, ScheduleResult};
use crate::validation::validate_run;

/// A scheduled run together with its metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    /// Policy that produced the result.
    pub algorithm: Algorithm,
    /// Service order and head path.
    pub result: ScheduleResult,
    /// Derived seek metrics.
    pub metrics: SeekMetrics,
}

/// Runs policies against a fixed configuration.
///
/// Holds no mutable state; one simulator can serve any number of runs.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator for the given configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Validates the input, runs `algorithm`, and computes metrics.
    ///
    /// # Errors
    /// - [`Error::InvalidInput`] if head, requests, or bounds are inconsistent
    ///   for a bounds-aware policy.
    /// - [`Error::InvalidSeekTime`] if the configured seek time is invalid.
    /// - [`Error::MovementOverflow`] if the head travels farther than a
    ///   `Cylinder` can express.
    pub fn run(&self, algorithm: Algorithm, requests: &[Cylinder]) -> Result<Simulation> {
        let context = self.config.sweep_context();
        validate_run(requests, self.config.head, algorithm, &context).map_err(|errors| {
            warn!("{algorithm}: rejected input ({} problems)", errors.len());
            Error::InvalidInput(errors)
        })?;

        let result = algorithm.run(requests, self.config.head, &context);
        let metrics = SeekMetrics::calculate(&result.path, requests.len(), self.config.seek_time_ms)?;
        debug!(
            "{algorithm}: avg seek {} cyl, throughput {} req/s",
            metrics.average_seek_distance, metrics.throughput
        );

        Ok(Simulation {
            algorithm,
            result,
            metrics,
        })
    }

    /// Runs a policy selected by name.
    ///
    /// # Errors
    /// [`Error::InvalidAlgorithm`] for an unknown name, plus those of [`Simulator::run`].
    pub fn run_named(&self, algorithm: &str, requests: &[Cylinder]) -> Result<Simulation> {
        self.run(algorithm.parse()?, requests)
    }

    /// Runs all six policies over the same requests.
    pub fn compare(&self, requests: &[Cylinder]) -> Result<Comparison> {
        let runs = Algorithm::ALL
            .iter()
            .map(|&algorithm| self.run(algorithm, requests))
            .collect::<Result<Vec<_>>>()?;
        Ok(Comparison::new(runs))
    }
}
