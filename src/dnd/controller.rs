//! Drag-and-Drop Controller
//!
//! Owns the transient drag state and decides what a drop does: reject it,
//! apply it, hold it for confirmation, or hand it to the new-patient flow.
//! The local board mutation is always applied before the backend push is
//! awaited, so the board reflects the move regardless of network latency,
//! and a failed push is never rolled back.

use std::sync::Arc;

use chrono::Utc;

use super::pending::{DragPhase, DragSource, DropOutcome, MultiLanePendingMove, PendingMove};
use crate::domain::{AttendanceKind, AttendanceStatus};
use crate::sync::Reconciler;
use crate::traits::{BoardNotifier, BoardSlot, PatientDirectory};

/// Transition engine over one `BoardSlot`.
///
/// Single logical writer: all board mutations go through this controller,
/// each producing a whole new board value before control returns to the
/// event loop.
pub struct DragController {
    board: Arc<dyn BoardSlot>,
    directory: Arc<dyn PatientDirectory>,
    notifier: Arc<dyn BoardNotifier>,
    reconciler: Reconciler,
    /// Lanes whose simultaneous bookings share one check-in confirmation
    paired_kinds: Vec<AttendanceKind>,
    phase: DragPhase,
}

impl DragController {
    pub fn new(
        board: Arc<dyn BoardSlot>,
        directory: Arc<dyn PatientDirectory>,
        notifier: Arc<dyn BoardNotifier>,
        reconciler: Reconciler,
    ) -> Self {
        Self {
            board,
            directory,
            notifier,
            reconciler,
            paired_kinds: vec![AttendanceKind::Spiritual, AttendanceKind::LightBath],
            phase: DragPhase::Idle,
        }
    }

    /// Override the paired lanes (defaults to spiritual + light-bath)
    pub fn with_pairing(mut self, kinds: Vec<AttendanceKind>) -> Self {
        self.paired_kinds = kinds;
        self
    }

    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    /// Pick a card up. Any previously pending move is discarded
    /// (last-writer-wins on the transient slot).
    ///
    /// Returns false when the card is not at the indicated cell; stale
    /// indices from a concurrent refresh land here.
    pub fn begin_drag(
        &mut self,
        kind: AttendanceKind,
        status: AttendanceStatus,
        patient_id: i64,
    ) -> bool {
        self.phase = DragPhase::Idle;
        if self.board.get().find_entry(kind, status, patient_id).is_none() {
            log::error!(
                "begin_drag: patient {} not at {}/{}",
                patient_id,
                kind.as_str(),
                status.as_str()
            );
            return false;
        }
        self.phase = DragPhase::Dragging(DragSource {
            kind,
            status,
            patient_id,
        });
        true
    }

    /// Abandon the current drag or pending confirmation, no side effects
    pub fn end_drag(&mut self) {
        self.phase = DragPhase::Idle;
    }

    /// Resolve a drop on `(dest_kind, dest_status)`.
    pub async fn handle_drop(
        &mut self,
        dest_kind: AttendanceKind,
        dest_status: AttendanceStatus,
    ) -> DropOutcome {
        let source = match &self.phase {
            DragPhase::Dragging(source) => *source,
            _ => {
                log::warn!("handle_drop: no active drag");
                return DropOutcome::Ignored;
            }
        };
        self.phase = DragPhase::Idle;

        if dest_kind != source.kind {
            // Lane assignment is not changed by drag-and-drop; booking a
            // patient into another lane is a separate workflow.
            log::debug!(
                "drop rejected: {} -> {} crosses lanes",
                source.kind.as_str(),
                dest_kind.as_str()
            );
            return DropOutcome::CrossLaneRejected;
        }

        if dest_status == source.status {
            return DropOutcome::Unchanged;
        }

        if dest_status == AttendanceStatus::CheckedIn {
            if let Some(patient) = self.directory.find(source.patient_id) {
                if patient.is_new() {
                    self.notifier.new_patient_detected(&patient);
                    return DropOutcome::NewPatientRedirect;
                }
            }

            if source.status == AttendanceStatus::Scheduled
                && self.paired_kinds.len() > 1
                && self.paired_kinds.contains(&source.kind)
                && self
                    .board
                    .get()
                    .is_scheduled_in_all(source.patient_id, &self.paired_kinds)
            {
                self.phase = DragPhase::AwaitingMultiLaneConfirm(MultiLanePendingMove {
                    patient_id: source.patient_id,
                    from_status: AttendanceStatus::Scheduled,
                    to_status: AttendanceStatus::CheckedIn,
                    dragged_kind: source.kind,
                    kinds: self.paired_kinds.clone(),
                });
                return DropOutcome::NeedsMultiLaneConfirm;
            }
        }

        self.apply_and_sync(source, dest_status).await;
        DropOutcome::Applied
    }

    /// Hold the drop for explicit confirmation instead of applying it.
    ///
    /// Kept as a public operation for callers that still gate backward
    /// moves behind a dialog; `handle_drop` itself applies them directly.
    pub fn defer_drop(&mut self, dest_kind: AttendanceKind, dest_status: AttendanceStatus) -> bool {
        let source = match &self.phase {
            DragPhase::Dragging(source) => *source,
            _ => {
                log::warn!("defer_drop: no active drag");
                return false;
            }
        };
        if dest_kind != source.kind {
            self.phase = DragPhase::Idle;
            return false;
        }
        self.phase = DragPhase::AwaitingConfirm(PendingMove {
            source,
            dest_status,
        });
        true
    }

    /// Apply the held single-lane move
    pub async fn confirm(&mut self) -> bool {
        let pending = match &self.phase {
            DragPhase::AwaitingConfirm(pending) => *pending,
            _ => {
                log::warn!("confirm: no pending move");
                return false;
            }
        };
        self.phase = DragPhase::Idle;
        self.apply_and_sync(pending.source, pending.dest_status).await;
        true
    }

    /// Discard whatever confirmation is pending, no mutation
    pub fn cancel(&mut self) {
        if matches!(
            self.phase,
            DragPhase::AwaitingConfirm(_) | DragPhase::AwaitingMultiLaneConfirm(_)
        ) {
            self.phase = DragPhase::Idle;
        } else {
            log::warn!("cancel: no pending move");
        }
    }

    /// Check the patient in on every paired lane still holding a scheduled
    /// card. Lane mutations are applied before any push; the backend pushes
    /// run concurrently and fail independently.
    pub async fn confirm_all_lanes(&mut self) -> bool {
        let pending = match &self.phase {
            DragPhase::AwaitingMultiLaneConfirm(pending) => pending.clone(),
            _ => {
                log::warn!("confirm_all_lanes: no pending multi-lane move");
                return false;
            }
        };
        self.phase = DragPhase::Idle;

        let now = Utc::now();
        let mut board = self.board.get();
        let mut moved = Vec::new();
        for kind in &pending.kinds {
            let (next, entry) = board.apply_move(
                pending.patient_id,
                *kind,
                pending.from_status,
                *kind,
                pending.to_status,
                now,
            );
            board = next;
            if let Some(entry) = entry {
                moved.push(entry);
            }
        }
        self.board.set(board);

        let mut pushes = Vec::new();
        for entry in moved {
            let reconciler = self.reconciler.clone();
            let status = pending.to_status;
            pushes.push(tokio::spawn(async move {
                reconciler.reconcile(&entry, status).await;
            }));
        }
        for push in pushes {
            let _ = push.await;
        }
        true
    }

    /// Check the patient in only on the lane the card was dragged in
    pub async fn confirm_dragged_lane(&mut self) -> bool {
        let pending = match &self.phase {
            DragPhase::AwaitingMultiLaneConfirm(pending) => pending.clone(),
            _ => {
                log::warn!("confirm_dragged_lane: no pending multi-lane move");
                return false;
            }
        };
        self.phase = DragPhase::Idle;
        let source = DragSource {
            kind: pending.dragged_kind,
            status: pending.from_status,
            patient_id: pending.patient_id,
        };
        self.apply_and_sync(source, pending.to_status).await;
        true
    }

    /// Optimistic move: mutate the board, notify completion listeners,
    /// then push the status change.
    async fn apply_and_sync(&self, source: DragSource, dest_status: AttendanceStatus) {
        let board = self.board.get();
        let (next, moved) = board.apply_move(
            source.patient_id,
            source.kind,
            source.status,
            source.kind,
            dest_status,
            Utc::now(),
        );
        let Some(entry) = moved else {
            return; // miss already logged by apply_move
        };
        self.board.set(next);
        if dest_status == AttendanceStatus::Completed {
            self.notifier.entry_completed(source.patient_id, &entry.name);
        }
        self.reconciler.reconcile(&entry, dest_status).await;
    }
}
