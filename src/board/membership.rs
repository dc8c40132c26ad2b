//! Lane Membership Queries
//!
//! Read-only lookups over a `DayBoard`, used by the drag-and-drop engine to
//! validate drags and to detect patients booked in more than one lane.

use super::snapshot::{AttendanceEntry, DayBoard};
use crate::domain::{AttendanceKind, AttendanceStatus};

impl DayBoard {
    /// The card for `patient_id` in one (lane, status) cell, if present
    pub fn find_entry(
        &self,
        kind: AttendanceKind,
        status: AttendanceStatus,
        patient_id: i64,
    ) -> Option<&AttendanceEntry> {
        self.lane(kind)
            .cell(status)
            .iter()
            .find(|entry| entry.patient_id == Some(patient_id))
    }

    /// True when the patient has a `Scheduled` card in every one of `kinds`
    pub fn is_scheduled_in_all(&self, patient_id: i64, kinds: &[AttendanceKind]) -> bool {
        !kinds.is_empty()
            && kinds.iter().all(|kind| {
                self.find_entry(*kind, AttendanceStatus::Scheduled, patient_id)
                    .is_some()
            })
    }

    /// Lanes where the patient currently has a `Scheduled` card
    pub fn scheduled_lanes(&self, patient_id: i64) -> Vec<AttendanceKind> {
        AttendanceKind::ALL
            .into_iter()
            .filter(|kind| {
                self.find_entry(*kind, AttendanceStatus::Scheduled, patient_id)
                    .is_some()
            })
            .collect()
    }

    /// Cards for this patient across all four columns of one lane
    pub fn count_in_lane(&self, kind: AttendanceKind, patient_id: i64) -> usize {
        AttendanceStatus::ALL
            .iter()
            .map(|status| {
                self.lane(kind)
                    .cell(*status)
                    .iter()
                    .filter(|entry| entry.patient_id == Some(patient_id))
                    .count()
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;
    use chrono::NaiveDate;

    fn card(patient_id: i64, name: &str) -> AttendanceEntry {
        AttendanceEntry {
            name: name.to_string(),
            priority: Priority::Routine,
            checked_in_time: None,
            on_going_time: None,
            completed_time: None,
            attendance_id: Some(patient_id * 100),
            patient_id: Some(patient_id),
        }
    }

    fn board() -> DayBoard {
        let mut board = DayBoard::empty(NaiveDate::from_ymd_opt(2024, 8, 5).unwrap());
        board.spiritual.scheduled.push(card(1, "Ana"));
        board.light_bath.scheduled.push(card(1, "Ana"));
        board.spiritual.scheduled.push(card(2, "Bruno"));
        board.rod.checked_in.push(card(3, "Clara"));
        board
    }

    #[test]
    fn find_entry_matches_on_patient_id() {
        let board = board();
        assert!(board
            .find_entry(AttendanceKind::Spiritual, AttendanceStatus::Scheduled, 1)
            .is_some());
        assert!(board
            .find_entry(AttendanceKind::Spiritual, AttendanceStatus::CheckedIn, 1)
            .is_none());
        assert!(board
            .find_entry(AttendanceKind::Rod, AttendanceStatus::CheckedIn, 3)
            .is_some());
    }

    #[test]
    fn multi_lane_requires_every_paired_lane() {
        let board = board();
        let pairing = [AttendanceKind::Spiritual, AttendanceKind::LightBath];
        assert!(board.is_scheduled_in_all(1, &pairing));
        assert!(!board.is_scheduled_in_all(2, &pairing));
        assert!(!board.is_scheduled_in_all(1, &[]));
    }

    #[test]
    fn scheduled_lanes_lists_only_scheduled_cells() {
        let board = board();
        assert_eq!(
            board.scheduled_lanes(1),
            vec![AttendanceKind::Spiritual, AttendanceKind::LightBath]
        );
        assert!(board.scheduled_lanes(3).is_empty());
    }
}
