use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

use crate::config::ChatConfig;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("chat upstream timed out")]
    Timeout,

    #[error("chat upstream returned status {status}")]
    Upstream { status: u16 },

    #[error("chat upstream returned a non-JSON body")]
    InvalidUpstreamBody,

    #[error("chat upstream unreachable: {0}")]
    Unreachable(String),
}

/// Stateless pass-through to the external Q&A endpoint.
///
/// One attempt per call, bounded by the configured timeout. No retry, no
/// caching, and no persistence resources are held while waiting.
#[derive(Clone)]
pub struct ChatService {
    http: Client,
    api_url: String,
    timeout: Duration,
}

impl ChatService {
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into(),
            timeout,
        }
    }

    pub fn from_config(config: &ChatConfig) -> Self {
        Self::new(config.api_url.clone(), Duration::from_secs(config.timeout_secs))
    }

    /// Forward a question upstream and relay the JSON body verbatim on 200.
    pub async fn ask(&self, question: &str) -> Result<Value, ChatError> {
        let response = self
            .http
            .post(&self.api_url)
            .json(&json!({ "question": question }))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ChatError::Timeout
                } else {
                    ChatError::Unreachable(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(ChatError::Upstream { status });
        }

        response.json::<Value>().await.map_err(|e| {
            if e.is_timeout() {
                ChatError::Timeout
            } else {
                ChatError::InvalidUpstreamBody
            }
        })
    }
}
