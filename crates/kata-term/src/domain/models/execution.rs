use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

pub use kata_runner_client::{
    ExecutionRequest, ExecutionResponse, RunnerClient, RunnerClientBox, TransportError,
};

#[derive(
    Debug, Default, Clone, PartialEq, Eq, Display, EnumString, Serialize, Deserialize, EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum RunnerName {
    #[default]
    Remote,
}

impl RunnerName {
    #[allow(dead_code)]
    pub fn parse(s: String) -> Option<RunnerName> {
        RunnerName::iter().find(|e| e.to_string() == s)
    }
}

/// Which of the two runner routes a call went through. The routes share one
/// wire contract; the distinction only drives user-facing copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    Execute,
    Submit,
}

impl RunKind {
    pub fn success_message(&self) -> &'static str {
        match self {
            RunKind::Execute => "Compiled Successfully!",
            RunKind::Submit => "Code submitted successfully!",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            RunKind::Execute => "Something went wrong! Please try again.",
            RunKind::Submit => "Failed to submit code!",
        }
    }
}
