//! Disk-head scheduling simulator for the U-Engine ecosystem.
//!
//! Orders a batch of pending cylinder requests under the classic operating
//! system policies and reports the resulting head movement.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Cylinder`, `Direction`, `DiskBounds`,
//!   `HeadPath`, `ScheduleResult`
//! - **`algorithms`**: FCFS, SSTF, SCAN, LOOK, C-SCAN, C-LOOK and the
//!   `Algorithm` selector
//! - **`metrics`**: Seek distance, elapsed time, and throughput
//! - **`simulator`**: Validated runs and all-policy comparison
//! - **`validation`**: Bounds and range checks
//! - **`parse`**: Request list parsing
//! - **`history`**: Saved runs and their CSV export
//! - **`workload`**: Seeded random request batches
//!
//! # Example
//!
//! ```
//! use u_disk_schedule::algorithms::Algorithm;
//! use u_disk_schedule::config::SimulationConfig;
//! use u_disk_schedule::parse::parse_requests;
//! use u_disk_schedule::simulator::Simulator;
//!
//! let requests = parse_requests("98, 183, 37, 122, 14, 124, 65, 67").unwrap();
//! let sim = Simulator::new(SimulationConfig::new().with_head(50));
//! let run = sim.run(Algorithm::Scan, &requests).unwrap();
//! assert_eq!(run.metrics.total_head_movement, 334);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 11
//! - Teorey & Pinkerton (1972), "A Comparative Analysis of Disk Scheduling Policies"

pub mod algorithms;
pub mod config;
pub mod error;
pub mod export;
pub mod history;
pub mod metrics;
pub mod models;
pub mod parse;
pub mod simulator;
pub mod validation;
pub mod workload;

pub use error::{Error, Result};
