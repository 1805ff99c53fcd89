/// Normalized view of a completed run, rebuilt from scratch on every
/// response. The previous value is overwritten, never merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputState {
    Success {
        stdout: String,
        memory: String,
        time: String,
    },
    RuntimeError {
        stderr: String,
        memory: String,
        time: String,
    },
    Timeout,
    Unknown {
        stderr: String,
    },
}

impl OutputState {
    pub fn is_success(&self) -> bool {
        matches!(self, OutputState::Success { .. })
    }

    pub fn status_description(&self) -> &'static str {
        match self {
            OutputState::Success { .. } => "Success",
            OutputState::RuntimeError { .. } => "Error",
            OutputState::Timeout => "Time Limit Exceeded",
            OutputState::Unknown { .. } => "Error",
        }
    }

    /// Text shown in the output pane.
    pub fn body(&self) -> &str {
        match self {
            OutputState::Success { stdout, .. } => stdout,
            OutputState::RuntimeError { stderr, .. } => stderr,
            OutputState::Timeout => "Time Limit Exceeded",
            OutputState::Unknown { stderr } => stderr,
        }
    }

    /// Raw (memory, time) metric strings, when the run produced usable ones.
    pub fn metrics(&self) -> Option<(&str, &str)> {
        match self {
            OutputState::Success { memory, time, .. } => Some((memory, time)),
            OutputState::RuntimeError { memory, time, .. } => Some((memory, time)),
            OutputState::Timeout => None,
            OutputState::Unknown { .. } => None,
        }
    }
}
