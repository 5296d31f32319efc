use crate::model::leave_request::LeaveRequestPayload;
use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::{debug, warn};

pub const CREATE_LEAVE_PATH: &str = "/api/leaves/create";

/// HTTP client for the HR backend. Cloning shares the connection pool.
#[derive(Clone, Debug)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            // no timeout and no retries
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Posts a leave request. Any HTTP status is returned as-is; only transport
    /// failures are errors.
    pub async fn create_leave(&self, payload: &LeaveRequestPayload) -> Result<StatusCode> {
        let url = self.endpoint(CREATE_LEAVE_PATH);
        debug!(%url, user_email = %payload.user_email, "Posting leave request");

        let resp = self
            .http
            .post(&url)
            .json(payload)
            .send()
            .await
            .with_context(|| format!("leave request to {} failed", url))?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "Backend did not accept leave request");
        }

        Ok(status)
    }
}
