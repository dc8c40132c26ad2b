//! Store Layer
//!
//! In-memory holders for the shared pieces of front-end state: the board
//! for the selected date, the loaded patient list, and the day-finalized
//! flags. All of them hand out clones; the engine replaces the board
//! wholesale on every move.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::NaiveDate;

use crate::board::DayBoard;
use crate::domain::{DomainResult, Patient};
use crate::traits::{BoardNotifier, BoardSlot, PatientDirectory, SnapshotLoader};

/// The board for the currently selected date
pub struct SharedBoard {
    board: Mutex<DayBoard>,
}

impl SharedBoard {
    pub fn new(board: DayBoard) -> Self {
        Self {
            board: Mutex::new(board),
        }
    }

    /// An empty board for the date, pending its first load
    pub fn for_date(date: NaiveDate) -> Self {
        Self::new(DayBoard::empty(date))
    }

    /// Replace the board from the backend. Used on date change and manual
    /// refresh; the error goes back to the caller so the UI can offer a
    /// retry with the same date. Any in-flight sync from the previous board
    /// generation is allowed to land stale; last reload wins.
    pub async fn reload_from(
        &self,
        loader: &dyn SnapshotLoader,
        date: NaiveDate,
    ) -> DomainResult<()> {
        let board = loader.load_board(date).await?;
        self.set(board);
        Ok(())
    }
}

impl BoardSlot for SharedBoard {
    fn get(&self) -> DayBoard {
        self.board.lock().expect("board lock poisoned").clone()
    }

    fn set(&self, board: DayBoard) {
        *self.board.lock().expect("board lock poisoned") = board;
    }
}

/// Patient list loaded alongside the board, indexed by id
#[derive(Default)]
pub struct PatientCache {
    patients: Mutex<HashMap<i64, Patient>>,
}

impl PatientCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_all(&self, patients: Vec<Patient>) {
        let mut map = self.patients.lock().expect("patient cache lock poisoned");
        map.clear();
        map.extend(patients.into_iter().map(|patient| (patient.id, patient)));
    }

    pub fn upsert(&self, patient: Patient) {
        self.patients
            .lock()
            .expect("patient cache lock poisoned")
            .insert(patient.id, patient);
    }
}

impl PatientDirectory for PatientCache {
    fn find(&self, patient_id: i64) -> Option<Patient> {
        self.patients
            .lock()
            .expect("patient cache lock poisoned")
            .get(&patient_id)
            .cloned()
    }
}

/// Whether a day's board has been closed out
pub trait DayFlagStore: Send + Sync {
    fn is_finalized(&self, date: NaiveDate) -> bool;
    fn set_finalized(&self, date: NaiveDate, finalized: bool);
}

/// Session-local day flags
#[derive(Default)]
pub struct InMemoryDayFlags {
    flags: Mutex<HashMap<NaiveDate, bool>>,
}

impl InMemoryDayFlags {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DayFlagStore for InMemoryDayFlags {
    fn is_finalized(&self, date: NaiveDate) -> bool {
        self.flags
            .lock()
            .expect("day flags lock poisoned")
            .get(&date)
            .copied()
            .unwrap_or(false)
    }

    fn set_finalized(&self, date: NaiveDate, finalized: bool) {
        self.flags
            .lock()
            .expect("day flags lock poisoned")
            .insert(date, finalized);
    }
}

/// Notifier for headless use: external flows are only logged
#[derive(Default)]
pub struct LogNotifier;

impl BoardNotifier for LogNotifier {
    fn new_patient_detected(&self, patient: &Patient) {
        log::info!("new patient {} routed to registration", patient.name);
    }

    fn entry_completed(&self, patient_id: i64, name: &str) {
        log::info!("attendance completed for {} ({})", name, patient_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PatientStatus, Priority};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 5).unwrap()
    }

    #[test]
    fn shared_board_replaces_wholesale() {
        let shared = SharedBoard::for_date(date());
        let mut board = shared.get();
        assert_eq!(board.spiritual.total(), 0);

        board.spiritual.scheduled.push(crate::board::AttendanceEntry {
            name: "Ana".to_string(),
            priority: Priority::Routine,
            checked_in_time: None,
            on_going_time: None,
            completed_time: None,
            attendance_id: None,
            patient_id: Some(1),
        });
        shared.set(board);
        assert_eq!(shared.get().spiritual.total(), 1);
    }

    #[test]
    fn patient_cache_finds_by_id() {
        let cache = PatientCache::new();
        cache.replace_all(vec![Patient {
            id: 7,
            name: "Bruno".to_string(),
            priority: Priority::Routine,
            status: PatientStatus::Active,
            birth_date: None,
            main_phone: None,
            start_date: None,
        }]);
        assert_eq!(cache.find(7).unwrap().name, "Bruno");
        assert!(cache.find(8).is_none());
    }

    #[test]
    fn day_flags_default_to_not_finalized() {
        let flags = InMemoryDayFlags::new();
        assert!(!flags.is_finalized(date()));
        flags.set_finalized(date(), true);
        assert!(flags.is_finalized(date()));
        flags.set_finalized(date(), false);
        assert!(!flags.is_finalized(date()));
    }
}
