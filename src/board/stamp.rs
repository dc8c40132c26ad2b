//! Progression Timestamp Stamping
//!
//! Which timestamp a card receives when it enters a status. Moving back to
//! `Scheduled` stamps nothing locally; the clearing of old timestamps
//! happens on the backend update path (see the sync layer).

use chrono::{DateTime, Utc};

use super::snapshot::AttendanceEntry;
use crate::domain::AttendanceStatus;

/// Copy of `entry` with the timestamp for `dest` set to `now`
pub fn stamp(
    entry: &AttendanceEntry,
    dest: AttendanceStatus,
    now: DateTime<Utc>,
) -> AttendanceEntry {
    let mut stamped = entry.clone();
    match dest {
        AttendanceStatus::Scheduled => {}
        AttendanceStatus::CheckedIn => stamped.checked_in_time = Some(now),
        AttendanceStatus::OnGoing => stamped.on_going_time = Some(now),
        AttendanceStatus::Completed => stamped.completed_time = Some(now),
    }
    stamped
}
