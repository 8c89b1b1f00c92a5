//! Disk geometry primitives: cylinders, sweep direction, and bounds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A cylinder address on the one-dimensional head axis.
pub type Cylinder = i64;

/// Initial sweep direction of the disk arm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward higher cylinder numbers.
    #[default]
    Right,
    /// Toward lower cylinder numbers.
    Left,
}

impl Direction {
    /// Lowercase name, as used in inputs and exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::Left => "left",
        }
    }

    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "right" => Ok(Direction::Right),
            "left" => Ok(Direction::Left),
            _ => Err(Error::InvalidDirection(s.to_string())),
        }
    }
}

/// Addressable cylinder range `[start, end]`.
///
/// Only the SCAN-family policies consult the bounds. Construction does not
/// enforce `start <= end`; see [`crate::validation`] for the checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskBounds {
    /// Lowest addressable cylinder.
    pub start: Cylinder,
    /// Highest addressable cylinder.
    pub end: Cylinder,
}

impl DiskBounds {
    /// Creates bounds covering `start..=end`.
    pub fn new(start: Cylinder, end: Cylinder) -> Self {
        Self { start, end }
    }

    /// Bounds for a disk with `cylinders` cylinders numbered from zero.
    pub fn with_cylinders(cylinders: Cylinder) -> Self {
        Self::new(0, cylinders.saturating_sub(1))
    }

    /// Distance between the two ends, saturated to the `Cylinder` range.
    pub fn span(&self) -> Cylinder {
        Cylinder::try_from(self.end.abs_diff(self.start)).unwrap_or(Cylinder::MAX)
    }

    /// Whether `start <= end`.
    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }

    /// Whether `cylinder` lies inside the range (inclusive).
    pub fn contains(&self, cylinder: Cylinder) -> bool {
        self.start <= cylinder && cylinder <= self.end
    }

    /// The boundary the arm reaches when sweeping in `direction`.
    pub fn edge(&self, direction: Direction) -> Cylinder {
        match direction {
            Direction::Right => self.end,
            Direction::Left => self.start,
        }
    }
}

impl Default for DiskBounds {
    fn default() -> Self {
        Self::new(0, 199)
    }
}
