//! Backend Reconciliation
//!
//! Pushes locally applied status changes to the backend after the fact.
//! The board favors responsiveness over strict consistency: a failed push
//! is logged and left alone, and the divergence lasts until the next full
//! board reload.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::ApiClient;
use crate::board::AttendanceEntry;
use crate::domain::{AttendanceStatus, DomainResult, StatusStamps};
use crate::traits::StatusSync;

/// Fire-and-forget status push over any `StatusSync` backend
#[derive(Clone)]
pub struct Reconciler {
    backend: Arc<dyn StatusSync>,
}

impl Reconciler {
    pub fn new(backend: Arc<dyn StatusSync>) -> Self {
        Self { backend }
    }

    /// Push the card's new status. Cards without a backend attendance row
    /// are purely local and skip the network entirely. Failures are logged;
    /// the already-applied local move is never reverted. No retry here; the
    /// next board reload corrects any divergence.
    pub async fn reconcile(&self, entry: &AttendanceEntry, status: AttendanceStatus) {
        let Some(attendance_id) = entry.attendance_id else {
            log::debug!("sync skipped for {}: no backend attendance yet", entry.name);
            return;
        };
        let stamps = match status {
            // Re-scheduling clears every progression timestamp on the backend
            AttendanceStatus::Scheduled => StatusStamps::cleared(),
            _ => entry.stamps(),
        };
        if let Err(err) = self.backend.push_status(attendance_id, status, stamps).await {
            log::warn!(
                "status sync failed for attendance {}: {} (local board kept)",
                attendance_id,
                err
            );
        }
    }
}

#[async_trait]
impl StatusSync for ApiClient {
    async fn push_status(
        &self,
        attendance_id: i64,
        status: AttendanceStatus,
        stamps: StatusStamps,
    ) -> DomainResult<()> {
        self.update_attendance_status(attendance_id, status, stamps)
            .await
            .map(|_| ())
    }
}
