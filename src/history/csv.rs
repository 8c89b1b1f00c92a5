//! History export table.

use std::str::FromStr;

use super::RunRecord;
use crate::error::{Error, Result};
use crate::export::{read_records, CsvTable};

/// Column order of the history export.
pub const HISTORY_COLUMNS: [&str; 13] = [
    "id",
    "name",
    "requests",
    "head",
    "algorithm",
    "direction",
    "disk_start",
    "disk_end",
    "seek_ms",
    "total_movement",
    "avg_seek",
    "throughput",
    "timestamp",
];

/// Writes records as CSV with the [`HISTORY_COLUMNS`] header.
///
/// Floats use Rust's shortest round-trip formatting, so [`from_csv`]
/// recovers them bit for bit.
pub fn to_csv(records: &[RunRecord]) -> String {
    let mut table = CsvTable::new(&HISTORY_COLUMNS);
    for r in records {
        table.push_row(&[
            r.id.to_string(),
            r.name.clone(),
            r.requests.clone(),
            r.head.to_string(),
            r.algorithm.to_string(),
            r.direction.to_string(),
            r.disk_start.to_string(),
            r.disk_end.to_string(),
            r.seek_ms.to_string(),
            r.total_movement.to_string(),
            r.avg_seek.to_string(),
            r.throughput.to_string(),
            r.timestamp.clone(),
        ]);
    }
    table.finish()
}

/// Reads a table produced by [`to_csv`].
///
/// # Errors
/// [`Error::Export`] if the header differs, a row has the wrong number of
/// fields, or a field does not parse.
pub fn from_csv(text: &str) -> Result<Vec<RunRecord>> {
    let rows = read_records(text).map_err(|record| Error::Export {
        record,
        message: "unterminated quoted field".into(),
    })?;

    let mut rows = rows.into_iter().enumerate();
    match rows.next() {
        Some((_, header)) if header == HISTORY_COLUMNS => {}
        Some(_) => {
            return Err(Error::Export {
                record: 1,
                message: "unexpected header".into(),
            })
        }
        None => return Ok(Vec::new()),
    }

    rows.map(|(index, row)| parse_row(index + 1, row)).collect()
}

fn parse_row(record: usize, row: Vec<String>) -> Result<RunRecord> {
    if row.len() != HISTORY_COLUMNS.len() {
        return Err(Error::Export {
            record,
            message: format!(
                "expected {} fields, found {}",
                HISTORY_COLUMNS.len(),
                row.len()
            ),
        });
    }

    Ok(RunRecord {
        id: parse_field(record, &row, 0)?,
        name: row[1].clone(),
        requests: row[2].clone(),
        head: parse_field(record, &row, 3)?,
        algorithm: parse_field(record, &row, 4)?,
        direction: parse_field(record, &row, 5)?,
        disk_start: parse_field(record, &row, 6)?,
        disk_end: parse_field(record, &row, 7)?,
        seek_ms: parse_field(record, &row, 8)?,
        total_movement: parse_field(record, &row, 9)?,
        avg_seek: parse_field(record, &row, 10)?,
        throughput: parse_field(record, &row, 11)?,
        timestamp: row[12].clone(),
    })
}

fn parse_field<T: FromStr>(record: usize, row: &[String], column: usize) -> Result<T> {
    let value = &row[column];
    value.parse().map_err(|_| Error::Export {
        record,
        message: format!("invalid {} value '{}'", HISTORY_COLUMNS[column], value),
    })
}
