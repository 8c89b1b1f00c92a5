//! Disk scheduling domain models.
//!
//! Provides the data types shared by the scheduler engine, the metrics
//! calculator, and the history layer.
//!
//! # Domain Mappings
//!
//! | u-disk-schedule | Operating system | Textbook |
//! |-----------------|------------------|----------|
//! | Cylinder | Track / LBA bucket | Cylinder number |
//! | HeadPath | Seek trace | Head movement graph |
//! | DiskBounds | Device geometry | Disk size |
//! | ScheduleResult | Dispatch order | Servicing order |

mod disk;
mod path;
mod result;

pub use disk::{Cylinder, Direction, DiskBounds};
pub use path::{HeadPath, Move, Visit, VisitKind};
pub use result::ScheduleResult;
