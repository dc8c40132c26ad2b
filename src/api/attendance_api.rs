//! Attendance Endpoints
//!
//! Scheduling CRUD, the per-move status update, and the wholesale board
//! load for a date.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;

use super::client::ApiClient;
use crate::board::{sort_queue, AttendanceEntry, DayBoard};
use crate::domain::{
    Attendance, AttendanceKind, AttendanceStatus, DomainResult, StatusStamps,
};
use crate::traits::SnapshotLoader;

/// Payload for booking a patient into a lane on a date
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAttendance {
    pub patient_id: i64,
    #[serde(rename = "type")]
    pub kind: AttendanceKind,
    pub date: NaiveDate,
    pub notes: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusUpdateBody {
    status: AttendanceStatus,
    #[serde(flatten)]
    stamps: StatusStamps,
}

impl ApiClient {
    pub async fn list_attendances(&self, date: NaiveDate) -> DomainResult<Vec<Attendance>> {
        self.get_json_query("/attendances", &[("date", date.to_string())])
            .await
    }

    pub async fn create_attendance(&self, new: &NewAttendance) -> DomainResult<Attendance> {
        self.post_json("/attendances", new).await
    }

    /// Unschedule; only meaningful while the attendance is still `Scheduled`
    pub async fn delete_attendance(&self, id: i64) -> DomainResult<()> {
        self.delete(&format!("/attendances/{}", id)).await
    }

    /// Push one status change with its timestamp triple. `None` timestamps
    /// serialize as explicit nulls, which is how re-scheduling clears them.
    pub async fn update_attendance_status(
        &self,
        id: i64,
        status: AttendanceStatus,
        stamps: StatusStamps,
    ) -> DomainResult<Attendance> {
        self.put_json(
            &format!("/attendances/{}/status", id),
            &StatusUpdateBody { status, stamps },
        )
        .await
    }

    /// Load every attendance for the date and fold the rows into a board,
    /// with each checked-in column pre-sorted by the queue order.
    pub async fn load_day_board(&self, date: NaiveDate) -> DomainResult<DayBoard> {
        let rows = self.list_attendances(date).await?;
        let mut board = DayBoard::empty(date);
        for row in &rows {
            let entry = AttendanceEntry::from(row);
            board.lane_mut(row.kind).cell_mut(row.status).push(entry);
        }
        for kind in AttendanceKind::ALL {
            let lane = board.lane_mut(kind);
            lane.checked_in = sort_queue(&lane.checked_in);
        }
        Ok(board)
    }
}

#[async_trait]
impl SnapshotLoader for ApiClient {
    async fn load_board(&self, date: NaiveDate) -> DomainResult<DayBoard> {
        self.load_day_board(date).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn status_update_body_flattens_stamps() {
        let now = Utc.with_ymd_and_hms(2024, 8, 5, 19, 30, 0).unwrap();
        let body = StatusUpdateBody {
            status: AttendanceStatus::CheckedIn,
            stamps: StatusStamps {
                checked_in_time: Some(now),
                on_going_time: None,
                completed_time: None,
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["status"], "checkedIn");
        assert!(json["checkedInTime"].is_string());
        assert!(json["onGoingTime"].is_null());
        assert!(json["completedTime"].is_null());
    }

    #[test]
    fn new_attendance_uses_backend_field_names() {
        let new = NewAttendance {
            patient_id: 7,
            kind: AttendanceKind::LightBath,
            date: NaiveDate::from_ymd_opt(2024, 8, 5).unwrap(),
            notes: None,
        };
        let json = serde_json::to_value(&new).unwrap();
        assert_eq!(json["patientId"], 7);
        assert_eq!(json["type"], "lightBath");
        assert_eq!(json["date"], "2024-08-05");
    }
}
