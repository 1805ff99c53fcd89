use kata_runner_client::ExecutionResponse;
use kata_runner_client::TransportError;
use tui_textarea::Input;

use super::Notification;
use super::RunKind;
use super::ThemeDescriptor;
use super::ThemeLoadError;

#[derive(Debug)]
pub enum Event {
    RunCompleted(RunKind, u64, ExecutionResponse),
    RunFailed(RunKind, u64, TransportError),
    ThemeCommitted(ThemeDescriptor),
    ThemeFailed(ThemeDescriptor, ThemeLoadError),
    Notify(Notification),
    KeyboardCharInput(Input),
    KeyboardCTRLC,
    KeyboardCTRLR,
    KeyboardCTRLS,
    KeyboardCTRLT,
    KeyboardPaste(String),
    UITick,
    UIScrollDown,
    UIScrollUp,
}
