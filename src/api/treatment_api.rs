//! Treatment Record and Session Endpoints

use super::client::ApiClient;
use crate::domain::{
    DomainResult, NewTreatmentRecord, NewTreatmentSession, TreatmentRecord, TreatmentSession,
};

impl ApiClient {
    pub async fn list_treatment_records(
        &self,
        patient_id: i64,
    ) -> DomainResult<Vec<TreatmentRecord>> {
        self.get_json(&format!("/patients/{}/treatment-records", patient_id))
            .await
    }

    pub async fn create_treatment_record(
        &self,
        new: &NewTreatmentRecord,
    ) -> DomainResult<TreatmentRecord> {
        self.post_json("/treatment-records", new).await
    }

    pub async fn update_treatment_record(
        &self,
        record: &TreatmentRecord,
    ) -> DomainResult<TreatmentRecord> {
        self.put_json(&format!("/treatment-records/{}", record.id), record)
            .await
    }

    pub async fn delete_treatment_record(&self, id: i64) -> DomainResult<()> {
        self.delete(&format!("/treatment-records/{}", id)).await
    }

    pub async fn list_treatment_sessions(
        &self,
        record_id: i64,
    ) -> DomainResult<Vec<TreatmentSession>> {
        self.get_json(&format!("/treatment-records/{}/sessions", record_id))
            .await
    }

    pub async fn create_treatment_session(
        &self,
        new: &NewTreatmentSession,
    ) -> DomainResult<TreatmentSession> {
        self.post_json("/treatment-sessions", new).await
    }

    /// Mark a session done; the backend bumps the record's completed count
    pub async fn complete_treatment_session(&self, id: i64) -> DomainResult<TreatmentSession> {
        self.put_json(&format!("/treatment-sessions/{}/complete", id), &())
            .await
    }
}
