//! Built-in scheduling policies.
//!
//! # Categories
//!
//! - **Order-based**: FCFS
//! - **Greedy**: SSTF
//! - **Elevator**: SCAN, LOOK
//! - **Circular**: C-SCAN, C-LOOK
//!
//! # Partitioning
//! Elevator and circular policies split requests around the head: cylinders
//! strictly below the head go left, everything else (including a request
//! sitting on the head) goes right. Duplicates are kept, so repeated
//! cylinders are serviced once per request.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 11.2
//! - Denning (1967), "Effects of Scheduling on File Memory Operations"

use log::trace;

use super::{DiskScheduler, SweepContext};
use crate::models::{Cylinder, Direction, HeadPath, ScheduleResult, VisitKind};

/// Requests on either side of the head, both sorted in sweep order.
///
/// `ahead` is serviced first when leaving the head in the sweep direction.
/// `behind` holds the remaining requests, also sorted along the sweep
/// direction, so reversing it yields the elevator's return trip.
struct Sides {
    ahead: Vec<Cylinder>,
    behind: Vec<Cylinder>,
}

fn split(requests: &[Cylinder], head: Cylinder, direction: Direction) -> Sides {
    let mut left: Vec<Cylinder> = requests.iter().copied().filter(|&r| r < head).collect();
    let mut right: Vec<Cylinder> = requests.iter().copied().filter(|&r| r >= head).collect();
    left.sort_unstable();
    right.sort_unstable();

    match direction {
        Direction::Right => Sides {
            ahead: right,
            behind: left,
        },
        Direction::Left => {
            left.reverse();
            right.reverse();
            Sides {
                ahead: left,
                behind: right,
            }
        }
    }
}

/// Services `cylinders` in order and returns the distance travelled.
fn service_all(path: &mut HeadPath, cylinders: impl IntoIterator<Item = Cylinder>) -> Cylinder {
    cylinders.into_iter().fold(0, |total: Cylinder, cylinder| {
        total.saturating_add(path.seek_to(cylinder, VisitKind::Request))
    })
}

/// Travels to `edge` unless the head already sits on it.
fn reach_edge(path: &mut HeadPath, edge: Cylinder) -> Cylinder {
    if path.last() == edge {
        0
    } else {
        path.seek_to(edge, VisitKind::Boundary)
    }
}

// ======================== Order-based ========================

/// First-Come First-Served.
///
/// Services requests exactly in arrival (input) order.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl DiskScheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, requests: &[Cylinder], head: Cylinder, _context: &SweepContext) -> ScheduleResult {
        let mut path = HeadPath::new(head);
        let total = service_all(&mut path, requests.iter().copied());
        ScheduleResult::new(self.name(), path, total)
    }

    fn description(&self) -> &'static str {
        "First-Come First-Served"
    }
}

// ======================== Greedy ========================

/// Shortest Seek Time First.
///
/// Repeatedly services the pending request nearest to the head. Ties go to
/// the request that appears first in the pending list, which keeps input
/// order among equidistant candidates.
///
/// # Complexity
/// O(n²) for n requests.
#[derive(Debug, Clone, Copy)]
pub struct Sstf;

impl DiskScheduler for Sstf {
    fn name(&self) -> &'static str {
        "SSTF"
    }

    fn schedule(&self, requests: &[Cylinder], head: Cylinder, _context: &SweepContext) -> ScheduleResult {
        let mut path = HeadPath::new(head);
        let mut pending = requests.to_vec();
        let mut total: Cylinder = 0;

        while !pending.is_empty() {
            let position = path.last();
            // min_by_key returns the first of several equal minima.
            let Some((index, _)) = pending
                .iter()
                .enumerate()
                .min_by_key(|&(_, &r)| r.abs_diff(position))
            else {
                break;
            };
            let next = pending.remove(index);
            trace!("SSTF: head {position} -> {next} ({} pending)", pending.len());
            total = total.saturating_add(path.seek_to(next, VisitKind::Request));
        }

        ScheduleResult::new(self.name(), path, total)
    }

    fn description(&self) -> &'static str {
        "Shortest Seek Time First"
    }
}

// ======================== Elevator ========================

/// SCAN (elevator).
///
/// Sweeps in the chosen direction servicing requests, continues to the disk
/// boundary on that side, then reverses and services the rest. The boundary
/// leg counts toward total movement.
#[derive(Debug, Clone, Copy)]
pub struct Scan;

impl DiskScheduler for Scan {
    fn name(&self) -> &'static str {
        "SCAN"
    }

    fn schedule(&self, requests: &[Cylinder], head: Cylinder, context: &SweepContext) -> ScheduleResult {
        let mut path = HeadPath::new(head);
        if requests.is_empty() {
            return ScheduleResult::new(self.name(), path, 0);
        }

        let sides = split(requests, head, context.direction);
        let total = service_all(&mut path, sides.ahead)
            .saturating_add(reach_edge(&mut path, context.bounds.edge(context.direction)))
            .saturating_add(service_all(&mut path, sides.behind.into_iter().rev()));
        ScheduleResult::new(self.name(), path, total)
    }

    fn description(&self) -> &'static str {
        "Elevator sweep to the disk boundary"
    }
}

/// LOOK.
///
/// Like SCAN, but reverses at the last request on the current side instead
/// of travelling to the disk boundary.
#[derive(Debug, Clone, Copy)]
pub struct Look;

impl DiskScheduler for Look {
    fn name(&self) -> &'static str {
        "LOOK"
    }

    fn schedule(&self, requests: &[Cylinder], head: Cylinder, context: &SweepContext) -> ScheduleResult {
        let mut path = HeadPath::new(head);
        let sides = split(requests, head, context.direction);
        let total = service_all(&mut path, sides.ahead)
            .saturating_add(service_all(&mut path, sides.behind.into_iter().rev()));
        ScheduleResult::new(self.name(), path, total)
    }

    fn description(&self) -> &'static str {
        "Elevator sweep reversing at the last request"
    }
}

// ======================== Circular ========================

/// Circular SCAN.
///
/// Sweeps to the disk boundary like SCAN, then jumps to the opposite
/// boundary and keeps servicing in the same direction. The return jump is
/// recorded on the path but adds no movement. No jump is made when nothing
/// is left behind the head.
#[derive(Debug, Clone, Copy)]
pub struct CScan;

impl DiskScheduler for CScan {
    fn name(&self) -> &'static str {
        "C-SCAN"
    }

    fn schedule(&self, requests: &[Cylinder], head: Cylinder, context: &SweepContext) -> ScheduleResult {
        let mut path = HeadPath::new(head);
        if requests.is_empty() {
            return ScheduleResult::new(self.name(), path, 0);
        }

        let direction = context.direction;
        let sides = split(requests, head, direction);
        let mut total = service_all(&mut path, sides.ahead)
            .saturating_add(reach_edge(&mut path, context.bounds.edge(direction)));

        let mut behind = sides.behind.into_iter().peekable();
        if let Some(&first) = behind.peek() {
            let far_edge = context.bounds.edge(direction.reversed());
            if first == far_edge {
                // A request on the far edge is serviced on arrival.
                behind.next();
                path.wrap_to(first, VisitKind::Request);
            } else {
                path.wrap_to(far_edge, VisitKind::Boundary);
            }
            total = total.saturating_add(service_all(&mut path, behind));
        }
        ScheduleResult::new(self.name(), path, total)
    }

    fn description(&self) -> &'static str {
        "Circular sweep with return to the opposite boundary"
    }
}

/// Circular LOOK.
///
/// Services the sweep side up to its last request, then jumps straight to
/// the farthest request behind the head and keeps servicing in the same
/// direction. The return jump adds no movement.
#[derive(Debug, Clone, Copy)]
pub struct CLook;

impl DiskScheduler for CLook {
    fn name(&self) -> &'static str {
        "C-LOOK"
    }

    fn schedule(&self, requests: &[Cylinder], head: Cylinder, context: &SweepContext) -> ScheduleResult {
        let mut path = HeadPath::new(head);
        let sides = split(requests, head, context.direction);
        let mut total = service_all(&mut path, sides.ahead);

        let mut behind = sides.behind.into_iter();
        if let Some(first) = behind.next() {
            path.wrap_to(first, VisitKind::Request);
            total = total.saturating_add(service_all(&mut path, behind));
        }
        ScheduleResult::new(self.name(), path, total)
    }

    fn description(&self) -> &'static str {
        "Circular sweep with return to the farthest request"
    }
}
