use std::time::Duration;

use async_trait::async_trait;

use crate::{ExecutionRequest, ExecutionResponse, RunnerClient, TransportError};

/// HTTP client for communicating with a remote runner service
pub struct HttpRunnerClient {
    base_url: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpRunnerClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn post_code(
        &self,
        route: &str,
        request: ExecutionRequest,
    ) -> Result<ExecutionResponse, TransportError> {
        let url = format!("{}/{}", self.base_url, route);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(route = route, status = status.as_u16(), "runner request failed");
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        let parsed = response.json::<ExecutionResponse>().await?;
        Ok(parsed)
    }
}

#[async_trait]
impl RunnerClient for HttpRunnerClient {
    async fn execute(&self, request: ExecutionRequest) -> Result<ExecutionResponse, TransportError> {
        self.post_code("execute", request).await
    }

    async fn submit(&self, request: ExecutionRequest) -> Result<ExecutionResponse, TransportError> {
        self.post_code("submit", request).await
    }
}
