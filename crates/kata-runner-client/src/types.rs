use serde::{Deserialize, Serialize};

/// Request body shared by the `/execute` and `/submit` routes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionRequest {
    pub code: String,
}

impl ExecutionRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

/// Response returned by the runner for both routes.
///
/// Only `exit_code` is guaranteed by the service; every other field is
/// defaulted during deserialization so downstream code can treat the
/// response as fully populated. `memory` is bytes and `time` is seconds,
/// both as decimal strings. `submission_id` is only present on `/submit`
/// responses, and is -1 when the run failed and nothing was recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResponse {
    pub exit_code: i64,
    #[serde(default)]
    pub output: String,
    #[serde(default = "zero_metric")]
    pub memory: String,
    #[serde(default = "zero_metric")]
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<i64>,
}

fn zero_metric() -> String {
    "0".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_are_defaulted() {
        let response: ExecutionResponse = serde_json::from_str(r#"{"exit_code": 2}"#).unwrap();

        assert_eq!(response.exit_code, 2);
        assert_eq!(response.output, "");
        assert_eq!(response.memory, "0");
        assert_eq!(response.time, "0");
        assert_eq!(response.submission_id, None);
    }

    #[test]
    fn test_full_response_round_trips() {
        let body = r#"{"exit_code":0,"output":"1\n","memory":"1048576","time":"0.1","submission_id":7}"#;
        let response: ExecutionResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.exit_code, 0);
        assert_eq!(response.output, "1\n");
        assert_eq!(response.memory, "1048576");
        assert_eq!(response.time, "0.1");
        assert_eq!(response.submission_id, Some(7));
    }
}
