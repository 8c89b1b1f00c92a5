//! Validated simulation runs and policy comparison.
//!
//! Wraps the raw policies with input validation and metrics so a caller can
//! go from a request list to a scored result in one call.
//!
//! # Flow
//!
//! 1. Validate head, requests, and bounds for the chosen policy.
//! 2. Run the policy to obtain a head path.
//! 3. Derive [`SeekMetrics`](crate::metrics::SeekMetrics) from the path.
//!
//! `Simulator::compare` repeats this for all six policies over the same input.

mod compare;
mod runner;

pub use compare::{Comparison, ComparisonRow};
pub use runner::{Simulation, Simulator};
