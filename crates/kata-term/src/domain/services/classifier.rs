//! Maps raw runner responses onto display states.
//!
//! Classification follows the service's exit-code convention: 0 ran clean,
//! 1 died with a runtime error, 2 was killed at the time limit. The
//! convention is not exhaustively documented, so anything else degrades to
//! an Unknown state instead of failing.

use kata_runner_client::ExecutionResponse;

use crate::domain::models::OutputState;

#[cfg(test)]
#[path = "classifier_test.rs"]
mod tests;

pub fn classify(response: &ExecutionResponse) -> OutputState {
    match response.exit_code {
        0 => {
            return OutputState::Success {
                stdout: response.output.clone(),
                memory: response.memory.clone(),
                time: response.time.clone(),
            };
        }
        1 => {
            return OutputState::RuntimeError {
                stderr: response.output.clone(),
                memory: response.memory.clone(),
                time: response.time.clone(),
            };
        }
        2 => {
            return OutputState::Timeout;
        }
        other => {
            tracing::warn!(exit_code = other, "unrecognized exit code from runner");
            return OutputState::Unknown {
                stderr: response.output.clone(),
            };
        }
    }
}

/// Memory usage in bytes (decimal string) rendered as megabytes. Total:
/// malformed input renders as "NaN MB" rather than failing.
pub fn format_memory_usage(memory: &str) -> String {
    let memory_in_mb = memory.parse::<f64>().unwrap_or(f64::NAN) / (1024.0 * 1024.0);
    return format!("{memory_in_mb:.2} MB");
}

/// Time taken in seconds (decimal string) rendered as milliseconds.
pub fn format_time_taken(time: &str) -> String {
    let time_in_ms = time.parse::<f64>().unwrap_or(f64::NAN) * 1000.0;
    return format!("{time_in_ms:.2} ms");
}
