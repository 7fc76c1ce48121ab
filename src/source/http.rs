//! HTTP implementation of [`AbsenceSource`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{AbsenceError, AbsenceResult};
use crate::models::{Absence, ConflictReport};

use super::AbsenceSource;

/// Per-request timeout. Expiry is reported as a failed fetch, which the
/// aggregator classifies like any other call failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// [`AbsenceSource`] backed by the remote absence API over HTTP.
///
/// The base URL is injected rather than hardcoded, so environments and test
/// doubles can point the engine at different endpoints.
///
/// # Example
///
/// ```no_run
/// use absence_engine::source::HttpAbsenceSource;
///
/// let source = HttpAbsenceSource::new("https://absences.example.test");
/// ```
#[derive(Debug, Clone)]
pub struct HttpAbsenceSource {
    client: Client,
    base_url: String,
}

impl HttpAbsenceSource {
    /// Creates a source rooted at `base_url` (no trailing slash required).
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Issues a GET and decodes the JSON body, mapping transport, status,
    /// and decode failures onto the engine's error taxonomy.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> AbsenceResult<T> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AbsenceError::FetchFailed {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AbsenceError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| AbsenceError::MalformedPayload {
                url: url.to_string(),
                message: e.to_string(),
            })
    }
}

#[async_trait]
impl AbsenceSource for HttpAbsenceSource {
    async fn fetch_absences(&self) -> AbsenceResult<Vec<Absence>> {
        let url = format!("{}/api/absences", self.base_url);
        self.get_json(&url).await
    }

    async fn fetch_conflict(&self, absence_id: &str) -> AbsenceResult<ConflictReport> {
        let url = format!("{}/api/conflict/{}", self.base_url, absence_id);
        self.get_json(&url).await
    }
}
