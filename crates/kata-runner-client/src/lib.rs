//! Client SDK for the remote code-running service.
//!
//! This crate provides a typed interface to the runner's two routes,
//! `/execute` and `/submit`. The routes share a single wire contract; they
//! differ only in whether the service records a submission. Responses are
//! normalized at this boundary so callers never see missing fields.

use async_trait::async_trait;

pub mod errors;
pub mod http_client;
pub mod types;

pub use errors::TransportError;
pub use types::*;

/// RunnerClient trait for communicating with a code-running service
#[async_trait]
pub trait RunnerClient: Send + Sync {
    /// Run code and return its transient output
    async fn execute(&self, request: ExecutionRequest) -> Result<ExecutionResponse, TransportError>;

    /// Run code via the route that also records a submission
    async fn submit(&self, request: ExecutionRequest) -> Result<ExecutionResponse, TransportError>;
}

pub type RunnerClientBox = Box<dyn RunnerClient>;

/// Factory for creating RunnerClient instances
pub struct RunnerClientFactory;

impl RunnerClientFactory {
    /// Create an HTTP client for a remote runner service
    pub fn create_http_client(base_url: String) -> RunnerClientBox {
        Box::new(http_client::HttpRunnerClient::new(base_url))
    }
}
