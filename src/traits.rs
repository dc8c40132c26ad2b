//! Collaborator Interfaces
//!
//! Abstract seams between the board engine and the rest of the application.
//! Production wiring uses the REST client and the in-memory stores; tests
//! swap in recording fakes.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::board::DayBoard;
use crate::domain::{AttendanceStatus, DomainResult, Patient, StatusStamps};

/// Holder of the board for the currently selected date.
///
/// The engine is decoupled from any UI state mechanism: it only needs a
/// get/set pair over the current snapshot.
pub trait BoardSlot: Send + Sync {
    fn get(&self) -> DayBoard;
    fn set(&self, board: DayBoard);
}

/// Lookup of patient records by their stable id
pub trait PatientDirectory: Send + Sync {
    fn find(&self, patient_id: i64) -> Option<Patient>;
}

/// Fire-and-forget handoffs to flows outside the board.
///
/// Implementations must not fail; an unavailable flow never blocks a move.
pub trait BoardNotifier: Send + Sync {
    /// A patient flagged as new was dragged to check-in; the registration
    /// form takes over instead of a normal move
    fn new_patient_detected(&self, patient: &Patient);

    /// A card entered `Completed`; the patient-record edit prompt opens
    fn entry_completed(&self, patient_id: i64, name: &str);
}

/// Asynchronous push of one status change to the backend
#[async_trait]
pub trait StatusSync: Send + Sync {
    async fn push_status(
        &self,
        attendance_id: i64,
        status: AttendanceStatus,
        stamps: StatusStamps,
    ) -> DomainResult<()>;
}

/// Wholesale load of the board for one date
#[async_trait]
pub trait SnapshotLoader: Send + Sync {
    async fn load_board(&self, date: NaiveDate) -> DomainResult<DayBoard>;
}
