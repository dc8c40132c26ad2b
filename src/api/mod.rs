//! API Layer
//!
//! Thin wrappers over the clinic REST backend. Every wrapper maps transport
//! failures and non-2xx responses into `DomainError`; nothing here retries.

mod attendance_api;
mod client;
mod patient_api;
mod settings_api;
mod treatment_api;

pub use attendance_api::NewAttendance;
pub use client::{ApiClient, ApiConfig};
pub use patient_api::NewPatient;
