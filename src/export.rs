//! Delimited-text export.
//!
//! Minimal RFC 4180 writer and reader: fields containing a comma, quote, or
//! line break are quoted, and embedded quotes are doubled. Records end with
//! `\n`.

use crate::models::HeadPath;

/// Builder for a CSV document with a fixed header.
#[derive(Debug, Clone)]
pub struct CsvTable {
    out: String,
    columns: usize,
}

impl CsvTable {
    /// Starts a table with the given header.
    pub fn new(header: &[&str]) -> Self {
        let mut table = Self {
            out: String::new(),
            columns: header.len(),
        };
        table.write_record(header.iter().copied());
        table
    }

    /// Number of header columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Appends one record.
    pub fn push_row<S: AsRef<str>>(&mut self, fields: &[S]) {
        debug_assert_eq!(fields.len(), self.columns);
        self.write_record(fields.iter().map(|f| f.as_ref()));
    }

    /// Returns the finished document.
    pub fn finish(self) -> String {
        self.out
    }

    fn write_record<'a>(&mut self, fields: impl Iterator<Item = &'a str>) {
        for (i, field) in fields.enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.out.push_str(&escape_field(field));
        }
        self.out.push('\n');
    }
}

/// Quotes a field when it needs quoting.
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Splits a CSV document into records of fields.
///
/// Quoted fields may span lines. A trailing line break does not produce an
/// empty record; blank lines are skipped. An unterminated quote fails with
/// the 1-based number of the record it appears in.
pub fn read_records(text: &str) -> Result<Vec<Vec<String>>, usize> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\r' => {}
            '\n' => {
                record.push(std::mem::take(&mut field));
                if !(record.len() == 1 && record[0].is_empty()) {
                    records.push(std::mem::take(&mut record));
                } else {
                    record.clear();
                }
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(records.len() + 1);
    }
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }
    Ok(records)
}

/// Head path as a `Step,Cylinder` table, step 0 being the start.
pub fn path_to_csv(path: &HeadPath) -> String {
    let mut table = CsvTable::new(&["Step", "Cylinder"]);
    for (step, cylinder) in path.positions().into_iter().enumerate() {
        table.push_row(&[step.to_string(), cylinder.to_string()]);
    }
    table.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("98, 183"), "\"98, 183\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_table() {
        let mut table = CsvTable::new(&["a", "b"]);
        table.push_row(&["1", "x,y"]);
        assert_eq!(table.columns(), 2);
        assert_eq!(table.finish(), "a,b\n1,\"x,y\"\n");
    }

    #[test]
    fn test_read_records() {
        let text = "a,b\n1,\"x,\"\"y\"\"\"\n\n2,\"multi\nline\"\n";
        let records = read_records(text).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1], vec!["1", "x,\"y\""]);
        assert_eq!(records[2], vec!["2", "multi\nline"]);
    }

    #[test]
    fn test_read_records_without_trailing_newline() {
        let records = read_records("a,b\r\n1,").unwrap();
        assert_eq!(records, vec![vec!["a", "b"], vec!["1", ""]]);
    }

    #[test]
    fn test_read_unterminated_quote() {
        assert_eq!(read_records("a\n\"open,1\n").unwrap_err(), 2);
    }

    #[test]
    fn test_path_to_csv() {
        let path = HeadPath::from_positions(&[50, 65, 14]);
        assert_eq!(path_to_csv(&path), "Step,Cylinder\n0,50\n1,65\n2,14\n");
    }
}
