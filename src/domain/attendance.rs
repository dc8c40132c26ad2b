//! Attendance Entity
//!
//! One backend attendance row: a patient booked into a treatment lane on a
//! given date, progressing through the day-board statuses.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::patient::Priority;

/// Treatment lane a patient can be booked into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttendanceKind {
    /// Spiritual consultation
    Spiritual,
    /// Light-bath session
    LightBath,
    /// Rod session
    Rod,
}

impl AttendanceKind {
    pub const ALL: [AttendanceKind; 3] = [
        AttendanceKind::Spiritual,
        AttendanceKind::LightBath,
        AttendanceKind::Rod,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceKind::Spiritual => "spiritual",
            AttendanceKind::LightBath => "lightBath",
            AttendanceKind::Rod => "rod",
        }
    }
}

/// Progression status within a lane, in board column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttendanceStatus {
    Scheduled,
    CheckedIn,
    OnGoing,
    Completed,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 4] = [
        AttendanceStatus::Scheduled,
        AttendanceStatus::CheckedIn,
        AttendanceStatus::OnGoing,
        AttendanceStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Scheduled => "scheduled",
            AttendanceStatus::CheckedIn => "checkedIn",
            AttendanceStatus::OnGoing => "onGoing",
            AttendanceStatus::Completed => "completed",
        }
    }
}

/// An attendance row as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    /// Unique identifier
    pub id: i64,
    pub patient_id: i64,
    /// Denormalized patient name for board display
    pub patient_name: String,
    pub priority: Priority,
    #[serde(rename = "type")]
    pub kind: AttendanceKind,
    pub status: AttendanceStatus,
    pub date: NaiveDate,
    pub checked_in_time: Option<DateTime<Utc>>,
    pub on_going_time: Option<DateTime<Utc>>,
    pub completed_time: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

/// The progression timestamp triple sent along with a status update.
///
/// All three fields are always serialized; a `None` becomes an explicit JSON
/// `null`, which is how re-scheduling clears previously stamped times on the
/// backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusStamps {
    pub checked_in_time: Option<DateTime<Utc>>,
    pub on_going_time: Option<DateTime<Utc>>,
    pub completed_time: Option<DateTime<Utc>>,
}

impl StatusStamps {
    /// The triple of explicit nulls used when moving back to `Scheduled`
    pub fn cleared() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_and_status_use_camel_case_tags() {
        assert_eq!(
            serde_json::to_string(&AttendanceKind::LightBath).unwrap(),
            "\"lightBath\""
        );
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::CheckedIn).unwrap(),
            "\"checkedIn\""
        );
        let status: AttendanceStatus = serde_json::from_str("\"onGoing\"").unwrap();
        assert_eq!(status, AttendanceStatus::OnGoing);
    }

    #[test]
    fn cleared_stamps_serialize_as_explicit_nulls() {
        let json = serde_json::to_value(StatusStamps::cleared()).unwrap();
        assert!(json["checkedInTime"].is_null());
        assert!(json["onGoingTime"].is_null());
        assert!(json["completedTime"].is_null());
    }

    #[test]
    fn attendance_row_round_trips_from_backend_json() {
        let row: Attendance = serde_json::from_str(
            r#"{
                "id": 42,
                "patientId": 7,
                "patientName": "Ana Souza",
                "priority": "2",
                "type": "spiritual",
                "status": "scheduled",
                "date": "2024-08-05",
                "checkedInTime": null,
                "onGoingTime": null,
                "completedTime": null,
                "notes": null
            }"#,
        )
        .unwrap();
        assert_eq!(row.kind, AttendanceKind::Spiritual);
        assert_eq!(row.status, AttendanceStatus::Scheduled);
        assert_eq!(row.priority, Priority::Urgent);
        assert!(row.checked_in_time.is_none());
    }
}
