use thiserror::Error;

/// Failure reaching or understanding the runner service.
///
/// Transport failures are recoverable by the caller; nothing here implies
/// the submitted code was wrong. The error is `Clone` so it can be shared
/// across waiters on a single in-flight call.
#[derive(Error, Debug, Clone)]
pub enum TransportError {
    #[error("runner service is not reachable: {0}")]
    Unreachable(String),
    #[error("runner service returned HTTP {status}")]
    Status { status: u16 },
    #[error("could not decode runner response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return TransportError::Decode(err.to_string());
        }

        TransportError::Unreachable(err.to_string())
    }
}
