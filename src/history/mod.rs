//! Run history: saved simulation snapshots and their export format.
//!
//! Persistence sits at the edge of the crate. Callers own a store object and
//! pass it explicitly to whatever saves or lists runs; there is no global
//! connection.
//!
//! # Export columns
//!
//! `id, name, requests, head, algorithm, direction, disk_start, disk_end,
//! seek_ms, total_movement, avg_seek, throughput, timestamp`

mod csv;
mod record;
mod store;

pub use self::csv::{from_csv, to_csv, HISTORY_COLUMNS};
pub use record::{NewRun, RunRecord};
pub use store::{format_timestamp, HistoryStore, MemoryStore};
