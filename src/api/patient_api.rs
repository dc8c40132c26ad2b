//! Patient Endpoints

use chrono::NaiveDate;
use serde::Serialize;

use super::client::ApiClient;
use crate::domain::{DomainResult, Patient, Priority};

/// Payload for registering a patient
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    pub name: String,
    pub priority: Priority,
    pub birth_date: Option<NaiveDate>,
    pub main_phone: Option<String>,
}

impl ApiClient {
    pub async fn list_patients(&self) -> DomainResult<Vec<Patient>> {
        self.get_json("/patients").await
    }

    /// Name search, matching the backend's substring semantics
    pub async fn search_patients(&self, query: &str) -> DomainResult<Vec<Patient>> {
        self.get_json_query("/patients", &[("search", query)]).await
    }

    pub async fn get_patient(&self, id: i64) -> DomainResult<Patient> {
        self.get_json(&format!("/patients/{}", id)).await
    }

    pub async fn create_patient(&self, new: &NewPatient) -> DomainResult<Patient> {
        self.post_json("/patients", new).await
    }

    pub async fn update_patient(&self, patient: &Patient) -> DomainResult<Patient> {
        self.put_json(&format!("/patients/{}", patient.id), patient)
            .await
    }

    pub async fn delete_patient(&self, id: i64) -> DomainResult<()> {
        self.delete(&format!("/patients/{}", id)).await
    }
}
