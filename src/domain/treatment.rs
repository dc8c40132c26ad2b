//! Treatment Records and Sessions
//!
//! Light-bath and rod treatments are prescribed as a record (what to apply,
//! where, for how many sessions) plus one session row per planned date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Treatments that run in sessions (spiritual consultations do not)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TreatmentKind {
    LightBath,
    Rod,
}

impl TreatmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TreatmentKind::LightBath => "lightBath",
            TreatmentKind::Rod => "rod",
        }
    }
}

/// A prescribed treatment for one patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentRecord {
    pub id: i64,
    pub patient_id: i64,
    #[serde(rename = "type")]
    pub kind: TreatmentKind,
    /// Body locations the treatment applies to
    pub body_locations: Vec<String>,
    /// Light color, light-bath only
    pub color: Option<String>,
    /// Session duration in minutes, light-bath only
    pub duration_minutes: Option<u32>,
    pub planned_sessions: u32,
    pub completed_sessions: u32,
    pub start_date: NaiveDate,
    pub notes: Option<String>,
}

impl TreatmentRecord {
    pub fn is_complete(&self) -> bool {
        self.completed_sessions >= self.planned_sessions
    }

    pub fn remaining_sessions(&self) -> u32 {
        self.planned_sessions.saturating_sub(self.completed_sessions)
    }
}

/// Payload for creating a treatment record
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTreatmentRecord {
    pub patient_id: i64,
    #[serde(rename = "type")]
    pub kind: TreatmentKind,
    pub body_locations: Vec<String>,
    pub color: Option<String>,
    pub duration_minutes: Option<u32>,
    pub planned_sessions: u32,
    pub start_date: NaiveDate,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionStatus {
    Scheduled,
    Completed,
    Missed,
}

/// One dated occurrence of a treatment record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentSession {
    pub id: i64,
    pub record_id: i64,
    pub date: NaiveDate,
    pub status: SessionStatus,
}

/// Payload for creating a treatment session
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTreatmentSession {
    pub record_id: i64,
    pub date: NaiveDate,
}
