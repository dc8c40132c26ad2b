//! Domain Layer
//!
//! Entities and enums shared with the REST backend.
//! This layer has NO I/O dependencies (except serde for serialization).

mod attendance;
mod entity;
mod patient;
mod schedule;
mod treatment;

pub use attendance::{Attendance, AttendanceKind, AttendanceStatus, StatusStamps};
pub use entity::{DomainError, DomainResult};
pub use patient::{Patient, PatientStatus, Priority};
pub use schedule::ScheduleSettings;
pub use treatment::{
    NewTreatmentRecord, NewTreatmentSession, SessionStatus, TreatmentKind, TreatmentRecord,
    TreatmentSession,
};
