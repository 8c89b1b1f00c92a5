//! Head movement path.
//!
//! A path is the ordered list of cylinders the head visits, starting at the
//! initial head position. Besides serviced requests it may contain synthetic
//! boundary visits (SCAN, C-SCAN) and circular return jumps (C-SCAN, C-LOOK).
//! Return jumps are drawn on the path but contribute no movement.

use serde::{Deserialize, Serialize};

use super::Cylinder;

/// Why the head stopped at a cylinder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisitKind {
    /// Initial head position.
    Start,
    /// A pending request was serviced here.
    Request,
    /// Synthetic stop at a disk boundary; nothing is serviced.
    Boundary,
}

/// A single stop on the head path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    /// Cylinder visited.
    pub cylinder: Cylinder,
    /// Reason for the visit.
    pub kind: VisitKind,
    /// Reached by a circular return jump (no movement counted).
    pub wrapped: bool,
}

/// One leg of the path, for step-by-step narration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// 1-based leg number.
    pub step: usize,
    /// Departure cylinder.
    pub from: Cylinder,
    /// Arrival cylinder.
    pub to: Cylinder,
    /// Counted seek distance (0 for a return jump).
    pub distance: Cylinder,
    /// Whether the leg is a circular return jump.
    pub wrapped: bool,
}

/// Append-only sequence of head visits.
///
/// Always holds at least the start visit. Deserialization rejects input
/// that does not begin with exactly one `Start` visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHeadPath")]
pub struct HeadPath {
    visits: Vec<Visit>,
}

#[derive(Deserialize)]
struct RawHeadPath {
    visits: Vec<Visit>,
}

impl TryFrom<RawHeadPath> for HeadPath {
    type Error = String;

    fn try_from(raw: RawHeadPath) -> Result<Self, Self::Error> {
        let Some((first, rest)) = raw.visits.split_first() else {
            return Err("head path has no start visit".into());
        };
        if first.kind != VisitKind::Start || first.wrapped {
            return Err(format!(
                "head path must begin at its start, found {:?} at cylinder {}",
                first.kind, first.cylinder
            ));
        }
        if rest.iter().any(|v| v.kind == VisitKind::Start) {
            return Err("head path has more than one start visit".into());
        }
        Ok(Self { visits: raw.visits })
    }
}

/// Unsigned gap between two cylinders, saturated to the `Cylinder` range.
fn distance(from: Cylinder, to: Cylinder) -> Cylinder {
    Cylinder::try_from(from.abs_diff(to)).unwrap_or(Cylinder::MAX)
}

impl HeadPath {
    /// Creates a path standing at `head`.
    pub fn new(head: Cylinder) -> Self {
        Self {
            visits: vec![Visit {
                cylinder: head,
                kind: VisitKind::Start,
                wrapped: false,
            }],
        }
    }

    /// Builds a plain path from raw positions.
    ///
    /// The first position is the start; every following one is treated as a
    /// serviced request reached by an ordinary seek. An empty slice yields a
    /// path standing at cylinder 0.
    pub fn from_positions(positions: &[Cylinder]) -> Self {
        let mut iter = positions.iter().copied();
        let mut path = Self::new(iter.next().unwrap_or(0));
        for cylinder in iter {
            path.seek_to(cylinder, VisitKind::Request);
        }
        path
    }

    /// Moves the head to `cylinder` and returns the distance travelled.
    ///
    /// A gap wider than `Cylinder::MAX` is reported as `Cylinder::MAX`.
    pub fn seek_to(&mut self, cylinder: Cylinder, kind: VisitKind) -> Cylinder {
        let distance = distance(self.last(), cylinder);
        self.visits.push(Visit {
            cylinder,
            kind,
            wrapped: false,
        });
        distance
    }

    /// Records a circular return jump to `cylinder`. Costs nothing.
    pub fn wrap_to(&mut self, cylinder: Cylinder, kind: VisitKind) {
        self.visits.push(Visit {
            cylinder,
            kind,
            wrapped: true,
        });
    }

    /// Current head position.
    pub fn last(&self) -> Cylinder {
        self.visits.last().map(|v| v.cylinder).unwrap_or_default()
    }

    /// Initial head position.
    pub fn head(&self) -> Cylinder {
        self.visits.first().map(|v| v.cylinder).unwrap_or_default()
    }

    /// All visits in order.
    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    /// Number of visits, including the start.
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    /// Always `false`; a path holds at least its start.
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Visited cylinders in order, starting with the head.
    pub fn positions(&self) -> Vec<Cylinder> {
        self.visits.iter().map(|v| v.cylinder).collect()
    }

    /// Cylinders of serviced requests, in service order.
    pub fn service_order(&self) -> Vec<Cylinder> {
        self.visits
            .iter()
            .filter(|v| v.kind == VisitKind::Request)
            .map(|v| v.cylinder)
            .collect()
    }

    /// Legs of the path with their counted distances.
    pub fn moves(&self) -> Vec<Move> {
        self.visits
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                let (from, to) = (pair[0].cylinder, pair[1].cylinder);
                Move {
                    step: i + 1,
                    from,
                    to,
                    distance: if pair[1].wrapped { 0 } else { distance(from, to) },
                    wrapped: pair[1].wrapped,
                }
            })
            .collect()
    }

    /// Sum of seek distances over all legs, excluding return jumps.
    ///
    /// Saturates at `Cylinder::MAX`.
    pub fn total_movement(&self) -> Cylinder {
        self.moves()
            .iter()
            .fold(0, |total: Cylinder, m| total.saturating_add(m.distance))
    }

    /// Lowest and highest cylinder on the path.
    pub fn extent(&self) -> (Cylinder, Cylinder) {
        let positions = self.positions();
        let min = positions.iter().copied().min().unwrap_or_else(|| self.head());
        let max = positions.iter().copied().max().unwrap_or_else(|| self.head());
        (min, max)
    }
}
