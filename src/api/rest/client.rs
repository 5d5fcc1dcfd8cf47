use std::time::Duration;

use async_trait::async_trait;

use super::errors::RestError;

/// HTTP transport used by the REST endpoints.
#[async_trait]
pub trait WebRequestClient: Send + Sync {
    /// POSTs a JSON body and returns the response body of a 2xx reply.
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<String, RestError>;
}

pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new(timeout: Duration) -> Result<Self, RestError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RestError::Transport(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl WebRequestClient for ReqwestClient {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<String, RestError> {
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| RestError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| RestError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(RestError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(text)
    }
}
