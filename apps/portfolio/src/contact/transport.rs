//! Outbound delivery of contact messages.
//!
//! `SubmissionController` only talks to a `ContactTransport`; the production
//! implementation posts JSON to the contact endpoint with reqwest.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

use crate::contact::form::ContactForm;

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("A submission is already in progress")]
    AlreadySubmitting,

    #[error("Contact endpoint rejected the message (status {status})")]
    Rejected { status: u16 },

    #[error("Contact endpoint unreachable: {0}")]
    Transport(String),

    #[error("Submission task ended before completing")]
    Aborted,
}

/// Sends one contact message. Implementations must not retry.
#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn deliver(&self, form: &ContactForm) -> Result<(), SubmitError>;
}

/// POSTs the form as JSON to a fixed endpoint. Any 2xx is success; the
/// response body is ignored.
#[derive(Clone)]
pub struct HttpContactTransport {
    client: Client,
    endpoint: String,
}

impl HttpContactTransport {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, SubmitError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        Ok(Self::with_client(client, endpoint))
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactTransport for HttpContactTransport {
    async fn deliver(&self, form: &ContactForm) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .json(form)
            .send()
            .await
            .map_err(|e| {
                warn!("Contact request to {} failed: {e}", self.endpoint);
                SubmitError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Contact endpoint {} returned {}", self.endpoint, status);
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
            });
        }

        debug!("Contact message accepted with status {}", status);
        Ok(())
    }
}
