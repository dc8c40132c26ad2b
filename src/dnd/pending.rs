//! Transient Drag State
//!
//! At most one of these values exists at a time, held by the controller
//! between a drag start and its resolution.

use crate::domain::{AttendanceKind, AttendanceStatus};

/// The cell a drag started from, plus the dragged patient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSource {
    pub kind: AttendanceKind,
    pub status: AttendanceStatus,
    pub patient_id: i64,
}

/// A single-lane move held for explicit confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingMove {
    pub source: DragSource,
    pub dest_status: AttendanceStatus,
}

/// A check-in held because the patient is scheduled in every paired lane;
/// confirmation may apply to all of them at once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiLanePendingMove {
    pub patient_id: i64,
    pub from_status: AttendanceStatus,
    pub to_status: AttendanceStatus,
    /// Lane the card was actually dragged in
    pub dragged_kind: AttendanceKind,
    /// The paired lanes the confirmation may fan out to
    pub kinds: Vec<AttendanceKind>,
}

/// Controller state machine
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging(DragSource),
    AwaitingConfirm(PendingMove),
    AwaitingMultiLaneConfirm(MultiLanePendingMove),
}

/// How a drop resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// No drag was active
    Ignored,
    /// Cross-lane moves are not a drag-and-drop operation
    CrossLaneRejected,
    /// Dropped on its own cell; nothing to do
    Unchanged,
    /// Moved locally, backend sync issued
    Applied,
    /// Routed to the new-patient registration flow; board untouched
    NewPatientRedirect,
    /// Held until the user decides one lane or all paired lanes
    NeedsMultiLaneConfirm,
}
