//! Schedule Settings Endpoints

use super::client::ApiClient;
use crate::domain::{DomainResult, ScheduleSettings};

impl ApiClient {
    pub async fn get_schedule_settings(&self) -> DomainResult<Vec<ScheduleSettings>> {
        self.get_json("/schedule-settings").await
    }

    pub async fn save_schedule_settings(
        &self,
        settings: &[ScheduleSettings],
    ) -> DomainResult<Vec<ScheduleSettings>> {
        self.put_json("/schedule-settings", settings).await
    }
}
