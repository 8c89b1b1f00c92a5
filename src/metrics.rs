//! Head movement metrics.
//!
//! Derives aggregate performance figures from a head path.
//!
//! # Metrics
//!
//! | Metric | Definition | Rounding |
//! |--------|-----------|----------|
//! | Total head movement | Sum of seek distances, excluding return jumps | exact |
//! | Average seek distance | Total movement / request count | 3 places |
//! | Total time | Total movement × seek time per cylinder, in seconds | 5 places |
//! | Throughput | Request count / total time (req/s) | 3 places |
//!
//! Degenerate inputs resolve to zero instead of failing: no requests gives
//! an average seek of 0, and zero elapsed time gives a throughput of 0.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Cylinder, HeadPath};

/// Seek performance of one scheduling run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeekMetrics {
    /// Total cylinders travelled.
    pub total_head_movement: Cylinder,
    /// Mean movement per request (cylinders).
    pub average_seek_distance: f64,
    /// Elapsed seek time (s).
    pub total_time_seconds: f64,
    /// Requests serviced per second.
    pub throughput: f64,
}

impl SeekMetrics {
    /// Computes metrics from a head path.
    ///
    /// Total movement is re-derived here from the visited cylinders rather
    /// than taken from the scheduler, so it doubles as a check on the
    /// policy's own total.
    ///
    /// # Arguments
    /// * `path` - Head path returned by a scheduler.
    /// * `request_count` - Number of requests in the batch (boundary visits excluded).
    /// * `seek_time_ms` - Time to move one cylinder, in milliseconds.
    ///
    /// # Errors
    /// - [`Error::InvalidSeekTime`] if `seek_time_ms` is negative or not finite.
    /// - [`Error::MovementOverflow`] if the movement does not fit in a `Cylinder`.
    pub fn calculate(path: &HeadPath, request_count: usize, seek_time_ms: f64) -> Result<Self> {
        if !seek_time_ms.is_finite() || seek_time_ms < 0.0 {
            return Err(Error::InvalidSeekTime(seek_time_ms));
        }

        let total = head_movement(path)?;

        let average = if request_count == 0 {
            0.0
        } else {
            total as f64 / request_count as f64
        };

        let seconds = total as f64 * seek_time_ms / 1000.0;

        let throughput = if seconds > 0.0 {
            request_count as f64 / seconds
        } else {
            0.0
        };

        Ok(Self {
            total_head_movement: total,
            average_seek_distance: round_to(average, 3),
            total_time_seconds: round_to(seconds, 5),
            throughput: round_to(throughput, 3),
        })
    }

    /// Computes metrics from raw positions, treating every leg as a seek.
    pub fn from_positions(
        positions: &[Cylinder],
        request_count: usize,
        seek_time_ms: f64,
    ) -> Result<Self> {
        Self::calculate(&HeadPath::from_positions(positions), request_count, seek_time_ms)
    }
}

/// Sums the seek legs of `path`, skipping return jumps.
fn head_movement(path: &HeadPath) -> Result<Cylinder> {
    let total: i128 = path
        .visits()
        .windows(2)
        .filter(|pair| !pair[1].wrapped)
        .map(|pair| (i128::from(pair[1].cylinder) - i128::from(pair[0].cylinder)).abs())
        .sum();
    Cylinder::try_from(total).map_err(|_| Error::MovementOverflow)
}

/// Rounds half away from zero to `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
