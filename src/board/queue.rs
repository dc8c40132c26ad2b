//! Checked-In Queue Ordering
//!
//! Orders the checked-in column before display and before choosing who is
//! attended next. Key: priority tier ascending, then check-in time ascending
//! with missing times last. Tier is always compared first; a card with a
//! check-in time only outranks a card without one at equal tier. The sort is
//! stable, so untimestamped cards at the same tier keep their arrival order.

use std::cmp::Ordering;

use super::snapshot::AttendanceEntry;

/// Sorted copy of a checked-in column. Non-mutating.
pub fn sort_queue(entries: &[AttendanceEntry]) -> Vec<AttendanceEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| {
        a.priority.cmp(&b.priority).then_with(|| {
            match (a.checked_in_time, b.checked_in_time) {
                (Some(left), Some(right)) => left.cmp(&right),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        })
    });
    sorted
}

/// The card to attend next: head of the sorted queue
pub fn next_in_queue(entries: &[AttendanceEntry]) -> Option<AttendanceEntry> {
    sort_queue(entries).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;
    use chrono::{TimeZone, Utc};

    fn entry(name: &str, priority: Priority, checked_in_minute: Option<u32>) -> AttendanceEntry {
        AttendanceEntry {
            name: name.to_string(),
            priority,
            checked_in_time: checked_in_minute
                .map(|minute| Utc.with_ymd_and_hms(2024, 8, 5, 19, minute, 0).unwrap()),
            on_going_time: None,
            completed_time: None,
            attendance_id: None,
            patient_id: None,
        }
    }

    fn names(entries: &[AttendanceEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn tier_beats_any_timestamp() {
        let queue = vec![
            entry("late-urgent", Priority::Urgent, Some(10)),
            entry("emergency-no-time", Priority::Emergency, None),
        ];
        assert_eq!(
            names(&sort_queue(&queue)),
            vec!["emergency-no-time", "late-urgent"]
        );
    }

    #[test]
    fn earlier_check_in_wins_within_tier() {
        let queue = vec![
            entry("second", Priority::Urgent, Some(30)),
            entry("first", Priority::Urgent, Some(5)),
            entry("emergency", Priority::Emergency, None),
        ];
        assert_eq!(
            names(&sort_queue(&queue)),
            vec!["emergency", "first", "second"]
        );
    }

    #[test]
    fn timestamped_card_outranks_untimestamped_at_equal_tier() {
        let queue = vec![
            entry("no-time", Priority::Routine, None),
            entry("has-time", Priority::Routine, Some(45)),
        ];
        assert_eq!(names(&sort_queue(&queue)), vec!["has-time", "no-time"]);
    }

    #[test]
    fn untimestamped_peers_keep_arrival_order() {
        let queue = vec![
            entry("a", Priority::Urgent, None),
            entry("b", Priority::Urgent, None),
            entry("c", Priority::Urgent, None),
        ];
        assert_eq!(names(&sort_queue(&queue)), vec!["a", "b", "c"]);
    }

    #[test]
    fn sorting_twice_matches_sorting_once() {
        let queue = vec![
            entry("a", Priority::Routine, None),
            entry("b", Priority::Emergency, Some(2)),
            entry("c", Priority::Urgent, None),
            entry("d", Priority::Urgent, Some(1)),
        ];
        let once = sort_queue(&queue);
        let twice = sort_queue(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn next_in_queue_is_sorted_head() {
        let queue = vec![
            entry("routine", Priority::Routine, Some(1)),
            entry("urgent", Priority::Urgent, Some(20)),
        ];
        assert_eq!(next_in_queue(&queue).unwrap().name, "urgent");
        assert!(next_in_queue(&[]).is_none());
    }
}
