//! Board Move Transform
//!
//! Atomic removal-then-insertion of one card between two cells, producing a
//! new board value. A card absent at the source cell is a stale-index case:
//! the board is returned unchanged and the miss is logged.

use chrono::{DateTime, Utc};

use super::snapshot::{AttendanceEntry, DayBoard};
use super::stamp::stamp;
use crate::domain::{AttendanceKind, AttendanceStatus};

impl DayBoard {
    /// Move the patient's card from one cell to another, stamping the
    /// destination timestamp. Returns the new board and the moved card, or
    /// `(unchanged, None)` when the card is not at the source cell.
    pub fn apply_move(
        &self,
        patient_id: i64,
        from_kind: AttendanceKind,
        from_status: AttendanceStatus,
        to_kind: AttendanceKind,
        to_status: AttendanceStatus,
        now: DateTime<Utc>,
    ) -> (DayBoard, Option<AttendanceEntry>) {
        let Some(entry) = self.find_entry(from_kind, from_status, patient_id) else {
            log::warn!(
                "apply_move: patient {} not at {}/{}, board unchanged",
                patient_id,
                from_kind.as_str(),
                from_status.as_str()
            );
            return (self.clone(), None);
        };
        let moved = stamp(entry, to_status, now);

        let mut next = self.clone();
        // Remove by identity, not index; the checked-in column may have been
        // reordered by the queue sorter since the drag started.
        next.lane_mut(from_kind)
            .cell_mut(from_status)
            .retain(|candidate| candidate.patient_id != Some(patient_id));
        next.lane_mut(to_kind)
            .cell_mut(to_status)
            .push(moved.clone());
        (next, Some(moved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;
    use chrono::{NaiveDate, TimeZone};

    fn card(patient_id: i64, name: &str) -> AttendanceEntry {
        AttendanceEntry {
            name: name.to_string(),
            priority: Priority::Urgent,
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
        board.spiritual.scheduled.push(card(2, "Bruno"));
        board.light_bath.scheduled.push(card(1, "Ana"));
        board
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 8, 5, 19, 0, 0).unwrap()
    }

    #[test]
    fn moves_card_and_stamps_destination() {
        let (next, moved) = board().apply_move(
            1,
            AttendanceKind::Spiritual,
            AttendanceStatus::Scheduled,
            AttendanceKind::Spiritual,
            AttendanceStatus::CheckedIn,
            now(),
        );
        let moved = moved.unwrap();
        assert_eq!(moved.checked_in_time, Some(now()));
        assert!(next
            .find_entry(AttendanceKind::Spiritual, AttendanceStatus::Scheduled, 1)
            .is_none());
        assert_eq!(
            next.find_entry(AttendanceKind::Spiritual, AttendanceStatus::CheckedIn, 1)
                .unwrap()
                .checked_in_time,
            Some(now())
        );
    }

    #[test]
    fn conserves_cards_within_the_lane() {
        let before = board();
        let (after, _) = before.apply_move(
            1,
            AttendanceKind::Spiritual,
            AttendanceStatus::Scheduled,
            AttendanceKind::Spiritual,
            AttendanceStatus::CheckedIn,
            now(),
        );
        assert_eq!(
            before.count_in_lane(AttendanceKind::Spiritual, 1),
            after.count_in_lane(AttendanceKind::Spiritual, 1)
        );
        assert_eq!(before.spiritual.total(), after.spiritual.total());
    }

    #[test]
    fn leaves_other_lanes_untouched() {
        let before = board();
        let (after, _) = before.apply_move(
            1,
            AttendanceKind::Spiritual,
            AttendanceStatus::Scheduled,
            AttendanceKind::Spiritual,
            AttendanceStatus::CheckedIn,
            now(),
        );
        assert_eq!(before.light_bath, after.light_bath);
        assert_eq!(before.rod, after.rod);
    }

    #[test]
    fn missing_card_returns_board_unchanged() {
        let before = board();
        let (after, moved) = before.apply_move(
            9,
            AttendanceKind::Spiritual,
            AttendanceStatus::Scheduled,
            AttendanceKind::Spiritual,
            AttendanceStatus::CheckedIn,
            now(),
        );
        assert!(moved.is_none());
        assert_eq!(before, after);
    }

    #[test]
    fn appends_at_end_of_destination_cell() {
        let mut start = board();
        start.spiritual.checked_in.push(card(3, "Clara"));
        let (after, _) = start.apply_move(
            1,
            AttendanceKind::Spiritual,
            AttendanceStatus::Scheduled,
            AttendanceKind::Spiritual,
            AttendanceStatus::CheckedIn,
            now(),
        );
        let names: Vec<&str> = after
            .spiritual
            .checked_in
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();
        assert_eq!(names, vec!["Clara", "Ana"]);
    }
}
