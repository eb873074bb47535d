//! HTTP client for the lead intake API.
//!
//! A small synchronous client: one agent with a configured timeout, one
//! POST. Validation happens before submission — this client only
//! transports records the caller has already accepted.

use crate::config::Config;
use crate::error::{LeadApiError, LeadApiResult};
use crate::models::{LeadForm, LeadReceipt, SubmitLeadRequest};
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for submitting leads.
#[derive(Clone)]
pub struct LeadClient {
    /// Base URL for the intake API
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl LeadClient {
    /// Create a new LeadClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.api_base_url.clone(),
            agent: Arc::new(agent),
        }
    }

    /// Create a LeadClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            agent: Arc::new(agent),
        }
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Submit a validated lead to the intake API.
    pub fn submit_lead(&self, lead: &LeadForm) -> LeadApiResult<LeadReceipt> {
        let request = SubmitLeadRequest::from(lead);
        let body = serde_json::to_value(&request).map_err(LeadApiError::JsonError)?;

        let response = self.post("/requests", &body)?;
        let body = response
            .into_string()
            .map_err(|e| LeadApiError::HttpError(e.to_string()))?;

        let receipt: LeadReceipt = serde_json::from_str(&body).map_err(LeadApiError::JsonError)?;

        tracing::info!(id = %receipt.id, "lead submitted");
        Ok(receipt)
    }

    /// Execute a POST request with a JSON body.
    fn post(&self, path: &str, body: &serde_json::Value) -> Result<ureq::Response, LeadApiError> {
        let url = self.build_url(path);

        tracing::debug!("POST {}", url);

        let result = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        match &result {
            Ok(response) => {
                tracing::debug!("POST {} - Success (status: {})", url, response.status());
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", url, e);
            }
        }

        result
    }

    /// Map a ureq error to a LeadApiError.
    fn map_error(&self, error: ureq::Error) -> LeadApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    429 => LeadApiError::RateLimitExceeded,
                    400 | 422 => LeadApiError::InvalidRequest(message),
                    _ => LeadApiError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    LeadApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    LeadApiError::Timeout
                } else {
                    LeadApiError::HttpError(transport.to_string())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_joins_slashes() {
        let client = LeadClient::with_base_url("https://api.example.com/".to_string());
        assert_eq!(
            client.build_url("/requests"),
            "https://api.example.com/requests"
        );
        assert_eq!(
            client.build_url("requests"),
            "https://api.example.com/requests"
        );
    }
}
