//! REST Client
//!
//! One reqwest client plus JSON helpers shared by the per-resource
//! wrappers.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{DomainError, DomainResult};

/// Connection settings for the clinic backend
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3333".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP client for the clinic backend
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> DomainResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> DomainResult<T> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| DomainError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    pub(crate) async fn get_json_query<T, Q>(&self, path: &str, query: &Q) -> DomainResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self
            .http
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .map_err(|e| DomainError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> DomainResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| DomainError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> DomainResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| DomainError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> DomainResult<()> {
        let response = self
            .http
            .delete(self.url(path))
            .send()
            .await
            .map_err(|e| DomainError::Network(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::status_error(status, response).await)
        }
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> DomainResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status, response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| DomainError::Internal(format!("bad response body: {}", e)))
    }

    async fn status_error(status: reqwest::StatusCode, response: reqwest::Response) -> DomainError {
        let body = response.text().await.unwrap_or_default();
        if status == reqwest::StatusCode::NOT_FOUND {
            DomainError::NotFound(body)
        } else {
            DomainError::Network(format!("{}: {}", status, body))
        }
    }
}
