//! History stores.

use log::debug;
use std::time::{SystemTime, UNIX_EPOCH};

use super::{NewRun, RunRecord};
use crate::error::Result;

/// Storage for saved runs.
///
/// Writes are single-record inserts; no transactions are required.
pub trait HistoryStore {
    /// Stores a run, assigning its id and timestamp.
    fn insert(&mut self, run: NewRun) -> Result<RunRecord>;

    /// All stored runs, most recent first.
    fn fetch_all(&self) -> Result<Vec<RunRecord>>;
}

/// In-process history store.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    records: Vec<RunRecord>,
    next_id: u64,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Stores a run with an explicit timestamp.
    pub fn insert_at(&mut self, run: NewRun, timestamp: impl Into<String>) -> RunRecord {
        let id = self.next_id;
        self.next_id += 1;
        let record = run.into_record(id, timestamp);
        debug!("history: stored run {} ({})", record.id, record.name);
        self.records.push(record.clone());
        record
    }

    /// Number of stored runs.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore for MemoryStore {
    fn insert(&mut self, run: NewRun) -> Result<RunRecord> {
        Ok(self.insert_at(run, now_timestamp()))
    }

    fn fetch_all(&self) -> Result<Vec<RunRecord>> {
        let mut records = self.records.clone();
        // Ids increase with insertion; timestamps only have second resolution.
        records.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(records)
    }
}

fn now_timestamp() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format_timestamp(secs)
}

/// Formats Unix seconds as `YYYY-MM-DD HH:MM:SS` (UTC).
pub fn format_timestamp(unix_secs: u64) -> String {
    let days = (unix_secs / 86_400) as i64;
    let rem = unix_secs % 86_400;
    let (year, month, day) = civil_from_days(days);
    format!(
        "{year:04}-{month:02}-{day:02} {:02}:{:02}:{:02}",
        rem / 3600,
        (rem % 3600) / 60,
        rem % 60
    )
}

/// Proleptic Gregorian date from days since 1970-01-01.
///
/// # Reference
/// Hinnant, "chrono-Compatible Low-Level Date Algorithms" (`civil_from_days`)
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = (if z >= 0 { z } else { z - 146_096 }) / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}
