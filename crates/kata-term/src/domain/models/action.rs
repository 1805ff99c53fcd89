use super::RunKind;
use super::ThemeDescriptor;

#[derive(Debug, Clone)]
pub enum Action {
    RunRequest(RunKind, String, u64),
    SelectTheme(ThemeDescriptor),
}
