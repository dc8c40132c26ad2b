//! Board Layer
//!
//! The per-date day board: one column per progression status in each
//! treatment lane. Pure state and transforms, no I/O.

mod membership;
mod moves;
mod queue;
mod snapshot;
mod stamp;

pub use queue::{next_in_queue, sort_queue};
pub use snapshot::{AttendanceEntry, DayBoard, LaneBoard};
pub use stamp::stamp;
