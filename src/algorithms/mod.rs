//! Disk-head scheduling policies.
//!
//! Provides the six classic policies (FCFS, SSTF, SCAN, LOOK, C-SCAN,
//! C-LOOK) behind a common [`DiskScheduler`] trait, plus an [`Algorithm`]
//! selector for callers that pick a policy by name.
//!
//! # Usage
//!
//! ```
//! use u_disk_schedule::algorithms::{Algorithm, SweepContext};
//! use u_disk_schedule::models::Direction;
//!
//! let ctx = SweepContext::new().with_direction(Direction::Right);
//! let result = Algorithm::Look.run(&[98, 183, 37, 122, 14, 124, 65, 67], 50, &ctx);
//! assert_eq!(result.total_movement, 302);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 11.2
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 5.4

mod context;
pub mod policies;
mod selector;

pub use context::SweepContext;
pub use selector::Algorithm;

use crate::models::{Cylinder, ScheduleResult};
use std::fmt::Debug;

/// A policy that orders a batch of pending requests.
///
/// Implementations are pure: the same requests, head, and context always
/// produce the same path. All requests are known up front.
pub trait DiskScheduler: Send + Sync + Debug {
    /// Policy name (e.g., "SSTF", "C-LOOK").
    fn name(&self) -> &'static str;

    /// Visits the requests starting from `head`.
    ///
    /// The returned total is accumulated from each seek as the path is
    /// built; return jumps add nothing and totals saturate at `Cylinder::MAX`.
    fn schedule(
        &self,
        requests: &[Cylinder],
        head: Cylinder,
        context: &SweepContext,
    ) -> ScheduleResult;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
