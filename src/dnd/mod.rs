//! Drag-and-Drop Layer
//!
//! The transition engine that moves cards across the day board and keeps
//! the local snapshot consistent with asynchronous backend writes.

mod controller;
mod pending;


pub use controller::DragController;
pub use pending::{DragPhase, DragSource, DropOutcome, MultiLanePendingMove, PendingMove};
