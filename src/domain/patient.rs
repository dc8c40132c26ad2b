//! Patient Entity
//!
//! A person registered (or about to be registered) at the clinic.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Attendance priority tier. Tier 1 is the most urgent.
///
/// The backend stores tiers as the strings "1"/"2"/"3"; the derived `Ord`
/// follows declaration order, so ascending sort puts emergencies first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "1")]
    Emergency,
    #[serde(rename = "2")]
    Urgent,
    #[serde(rename = "3")]
    Routine,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Emergency => "1",
            Priority::Urgent => "2",
            Priority::Routine => "3",
        }
    }
}

/// Registration status of a patient record
///
/// `New` marks a patient scheduled by phone who has never checked in;
/// the first check-in routes through the registration form instead of
/// a normal board move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientStatus {
    New,
    Active,
    Inactive,
}

impl PatientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatientStatus::New => "new",
            PatientStatus::Active => "active",
            PatientStatus::Inactive => "inactive",
        }
    }
}

/// A patient record as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Unique identifier
    pub id: i64,
    /// Full display name (not unique, never used as a correlation key)
    pub name: String,
    /// Default priority tier for new attendances
    pub priority: Priority,
    /// Registration status
    pub status: PatientStatus,
    pub birth_date: Option<NaiveDate>,
    pub main_phone: Option<String>,
    /// Date the patient first attended
    pub start_date: Option<NaiveDate>,
}

impl Patient {
    /// Whether the first check-in must route through the registration form
    pub fn is_new(&self) -> bool {
        self.status == PatientStatus::New
    }
}
