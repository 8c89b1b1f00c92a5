//! Policy selection by name.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::policies::{CLook, CScan, Fcfs, Look, Scan, Sstf};
use super::{DiskScheduler, SweepContext};
use crate::error::Error;
use crate::models::{Cylinder, ScheduleResult};

/// The six supported scheduling policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come First-Served: input order.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest Seek Time First: nearest pending request.
    #[serde(rename = "SSTF")]
    Sstf,
    /// Elevator sweep out to the disk boundary.
    #[serde(rename = "SCAN")]
    Scan,
    /// Elevator sweep reversing at the last request.
    #[serde(rename = "LOOK")]
    Look,
    /// Circular SCAN: boundary sweep, jump to the opposite boundary.
    #[serde(rename = "C-SCAN")]
    CScan,
    /// Circular LOOK: jump back to the farthest request behind the head.
    #[serde(rename = "C-LOOK")]
    CLook,
}

impl Algorithm {
    /// All policies, in presentation order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Fcfs,
        Algorithm::Sstf,
        Algorithm::Scan,
        Algorithm::Look,
        Algorithm::CScan,
        Algorithm::CLook,
    ];

    /// The policy implementation.
    pub fn scheduler(&self) -> &'static dyn DiskScheduler {
        match self {
            Algorithm::Fcfs => &Fcfs,
            Algorithm::Sstf => &Sstf,
            Algorithm::Scan => &Scan,
            Algorithm::Look => &Look,
            Algorithm::CScan => &CScan,
            Algorithm::CLook => &CLook,
        }
    }

    /// Canonical upper-case name (e.g., "C-LOOK").
    pub fn name(&self) -> &'static str {
        self.scheduler().name()
    }

    /// Whether the policy travels to the disk boundaries.
    pub fn uses_bounds(&self) -> bool {
        matches!(self, Algorithm::Scan | Algorithm::CScan)
    }

    /// Whether the policy honors the sweep direction.
    pub fn uses_direction(&self) -> bool {
        !matches!(self, Algorithm::Fcfs | Algorithm::Sstf)
    }

    /// Runs the policy and packages the result.
    ///
    /// Performs no validation: out-of-range heads or requests and inverted
    /// bounds produce whatever path the policy geometry yields. Use
    /// [`crate::simulator::Simulator`] for validated runs.
    pub fn run(&self, requests: &[Cylinder], head: Cylinder, context: &SweepContext) -> ScheduleResult {
        let result = self.scheduler().schedule(requests, head, context);
        debug!(
            "{}: {} requests from head {} -> total movement {}",
            result.algorithm,
            requests.len(),
            head,
            result.total_movement
        );
        result
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Accepts names case-insensitively, with or without the dash
    /// (`"c-scan"`, `"CSCAN"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_uppercase())
            .collect();
        match key.as_str() {
            "FCFS" => Ok(Algorithm::Fcfs),
            "SSTF" => Ok(Algorithm::Sstf),
            "SCAN" => Ok(Algorithm::Scan),
            "LOOK" => Ok(Algorithm::Look),
            "CSCAN" => Ok(Algorithm::CScan),
            "CLOOK" => Ok(Algorithm::CLook),
            _ => Err(Error::InvalidAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("fcfs".parse::<Algorithm>().unwrap(), Algorithm::Fcfs);
        assert_eq!("C-SCAN".parse::<Algorithm>().unwrap(), Algorithm::CScan);
        assert_eq!("clook".parse::<Algorithm>().unwrap(), Algorithm::CLook);
        assert_eq!(" Look ".parse::<Algorithm>().unwrap(), Algorithm::Look);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "EDF".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, Error::InvalidAlgorithm("EDF".into()));
    }

    #[test]
    fn test_names_roundtrip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
        }
        assert_eq!(Algorithm::CLook.to_string(), "C-LOOK");
    }

    #[test]
    fn test_capabilities() {
        assert!(Algorithm::Scan.uses_bounds());
        assert!(Algorithm::CScan.uses_bounds());
        assert!(!Algorithm::CLook.uses_bounds());
        assert!(Algorithm::Look.uses_direction());
        assert!(!Algorithm::Sstf.uses_direction());
    }

    #[test]
    fn test_run_packages_result() {
        let result = Algorithm::Sstf.run(&[98, 183, 37, 122, 14, 124, 65, 67], 50, &SweepContext::new());
        assert_eq!(result.algorithm, "SSTF");
        assert_eq!(result.order[0], 65);
        assert_eq!(result.total_movement, 239);
    }

    #[test]
    fn test_serde_name() {
        let json = serde_json::to_string(&Algorithm::CScan).unwrap();
        assert_eq!(json, "\"C-SCAN\"");
    }
}
