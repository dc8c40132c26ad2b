//! Clinic Day-Board Core
//!
//! State engine and REST client for tracking clinic attendances (spiritual
//! consultations, light-bath and rod treatments) through a day-by-day board:
//! scheduled -> checked-in -> on-going -> completed.
//!
//! Layered architecture:
//! - domain: entities and enums shared with the REST backend
//! - board: the per-date snapshot, queue ordering, timestamps, moves
//! - dnd: the drag-and-drop transition engine over the board
//! - sync: fire-and-forget backend status reconciliation
//! - api: REST wrappers (patients, attendances, treatments, settings)
//! - store: shared in-memory state holders
//! - traits: abstract seams between the engine and its collaborators

pub mod api;
pub mod board;
pub mod dnd;
pub mod domain;
pub mod store;
pub mod sync;
pub mod traits;

pub use api::{ApiClient, ApiConfig, NewAttendance, NewPatient};
pub use board::{next_in_queue, sort_queue, AttendanceEntry, DayBoard, LaneBoard};
pub use dnd::{DragController, DragPhase, DropOutcome};
pub use domain::{
    Attendance, AttendanceKind, AttendanceStatus, DomainError, DomainResult, Patient,
    PatientStatus, Priority, ScheduleSettings, StatusStamps, TreatmentRecord, TreatmentSession,
};
pub use store::{DayFlagStore, InMemoryDayFlags, LogNotifier, PatientCache, SharedBoard};
pub use sync::Reconciler;
pub use traits::{BoardNotifier, BoardSlot, PatientDirectory, SnapshotLoader, StatusSync};
