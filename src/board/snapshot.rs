//! Day Board Snapshot
//!
//! In-memory representation of every lane and status column for the
//! selected date. Loaded wholesale from the backend, transformed by the
//! drag-and-drop engine, discarded on refresh or date change. The backend
//! attendance table stays the system of record.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Attendance, AttendanceKind, AttendanceStatus, Priority, StatusStamps};

/// A patient's card in one (lane, status) cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEntry {
    pub name: String,
    pub priority: Priority,
    pub checked_in_time: Option<DateTime<Utc>>,
    pub on_going_time: Option<DateTime<Utc>>,
    pub completed_time: Option<DateTime<Utc>>,
    /// Backend attendance row; absent only for cards injected client-side
    /// before the backend confirms them
    pub attendance_id: Option<i64>,
    /// Stable patient identity, the correlation key across lanes
    pub patient_id: Option<i64>,
}

impl AttendanceEntry {
    /// Snapshot of the progression timestamps for a backend status update
    pub fn stamps(&self) -> StatusStamps {
        StatusStamps {
            checked_in_time: self.checked_in_time,
            on_going_time: self.on_going_time,
            completed_time: self.completed_time,
        }
    }
}

impl From<&Attendance> for AttendanceEntry {
    fn from(row: &Attendance) -> Self {
        Self {
            name: row.patient_name.clone(),
            priority: row.priority,
            checked_in_time: row.checked_in_time,
            on_going_time: row.on_going_time,
            completed_time: row.completed_time,
            attendance_id: Some(row.id),
            patient_id: Some(row.patient_id),
        }
    }
}

/// The four status columns of one treatment lane
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneBoard {
    pub scheduled: Vec<AttendanceEntry>,
    pub checked_in: Vec<AttendanceEntry>,
    pub on_going: Vec<AttendanceEntry>,
    pub completed: Vec<AttendanceEntry>,
}

impl LaneBoard {
    pub fn cell(&self, status: AttendanceStatus) -> &[AttendanceEntry] {
        match status {
            AttendanceStatus::Scheduled => &self.scheduled,
            AttendanceStatus::CheckedIn => &self.checked_in,
            AttendanceStatus::OnGoing => &self.on_going,
            AttendanceStatus::Completed => &self.completed,
        }
    }

    pub fn cell_mut(&mut self, status: AttendanceStatus) -> &mut Vec<AttendanceEntry> {
        match status {
            AttendanceStatus::Scheduled => &mut self.scheduled,
            AttendanceStatus::CheckedIn => &mut self.checked_in,
            AttendanceStatus::OnGoing => &mut self.on_going,
            AttendanceStatus::Completed => &mut self.completed,
        }
    }

    /// Total cards across all four columns
    pub fn total(&self) -> usize {
        AttendanceStatus::ALL
            .iter()
            .map(|status| self.cell(*status).len())
            .sum()
    }
}

/// All three lanes for one calendar date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayBoard {
    pub date: NaiveDate,
    pub spiritual: LaneBoard,
    pub light_bath: LaneBoard,
    pub rod: LaneBoard,
}

impl DayBoard {
    /// A board with every column empty
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            spiritual: LaneBoard::default(),
            light_bath: LaneBoard::default(),
            rod: LaneBoard::default(),
        }
    }

    pub fn lane(&self, kind: AttendanceKind) -> &LaneBoard {
        match kind {
            AttendanceKind::Spiritual => &self.spiritual,
            AttendanceKind::LightBath => &self.light_bath,
            AttendanceKind::Rod => &self.rod,
        }
    }

    pub fn lane_mut(&mut self, kind: AttendanceKind) -> &mut LaneBoard {
        match kind {
            AttendanceKind::Spiritual => &mut self.spiritual,
            AttendanceKind::LightBath => &mut self.light_bath,
            AttendanceKind::Rod => &mut self.rod,
        }
    }
}
