//! Request list parsing.

use crate::error::{Error, Result};
use crate::models::Cylinder;

/// Parses a comma- and/or whitespace-separated list of cylinders.
///
/// Empty or whitespace-only text yields an empty list. The first token that
/// is not an integer is reported in [`Error::Parse`].
///
/// ```
/// use u_disk_schedule::parse::parse_requests;
///
/// assert_eq!(parse_requests("98, 183 37").unwrap(), vec![98, 183, 37]);
/// assert!(parse_requests("   ").unwrap().is_empty());
/// ```
pub fn parse_requests(text: &str) -> Result<Vec<Cylinder>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<Cylinder>().map_err(|_| Error::Parse {
                token: token.to_string(),
            })
        })
        .collect()
}

/// Formats cylinders the way they are entered: `"98, 183, 37"`.
pub fn format_requests(requests: &[Cylinder]) -> String {
    requests
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
