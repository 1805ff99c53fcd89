//! The workbench state machine.
//!
//! One struct owns everything the UI displays: the code buffer, the busy
//! flag, the last classified output, and the active theme. All mutation
//! happens from the main event loop, so the state needs no locking; async
//! work reports back as events carrying the run token they were issued
//! with, and stale tokens are dropped on the floor.

use kata_runner_client::ExecutionResponse;
use kata_runner_client::TransportError;

use super::classifier;
use crate::domain::models::Action;
use crate::domain::models::Notification;
use crate::domain::models::NotificationSinkBox;
use crate::domain::models::OutputState;
use crate::domain::models::RunKind;
use crate::domain::models::ThemeDescriptor;
use crate::domain::models::ThemeLoadError;
use crate::domain::models::find_theme;

#[cfg(test)]
#[path = "workbench_test.rs"]
mod tests;

pub const DEFAULT_SNIPPET: &str = r#"# Returns index of x in arr if present, else -1
def binary_search(arr, low, high, x):

    # Check base case
    if high >= low:

        mid = (high + low) // 2

        # If element is present at the middle itself
        if arr[mid] == x:
            return mid

        # If element is smaller than mid, then it can only
        # be present in left subarray
        elif arr[mid] > x:
            return binary_search(arr, low, mid - 1, x)

        # Else the element can only be present in right subarray
        else:
            return binary_search(arr, mid + 1, high, x)

    else:
        # Element is not present in the array
        return -1

# Test array
arr = [2, 3, 4, 10, 40]
x = 10

# Function call
result = binary_search(arr, 0, len(arr) - 1, x)

if result != -1:
    print("Element is present at index", str(result))
else:
    print("Element is not present in array")
"#;

pub struct Workbench {
    pub code: String,
    pub busy: bool,
    pub output: Option<OutputState>,
    pub active_theme: ThemeDescriptor,
    run_token: u64,
    notifier: NotificationSinkBox,
}

impl Workbench {
    pub fn new(notifier: NotificationSinkBox) -> Workbench {
        return Workbench {
            code: DEFAULT_SNIPPET.to_string(),
            busy: false,
            output: None,
            // The widget falls back to its built-in dark theme until the
            // configured theme finishes loading.
            active_theme: find_theme("vs-dark").unwrap(),
            run_token: 0,
            notifier,
        };
    }

    /// Edits always land, busy or not. A cleared buffer falls back to the
    /// default snippet so there is never nothing to run.
    pub fn update_code(&mut self, text: &str) {
        if text.is_empty() {
            self.code = DEFAULT_SNIPPET.to_string();
            return;
        }

        self.code = text.to_string();
    }

    /// Idle -> Busy. Inert while a call is already in flight or when the
    /// buffer is empty; neither case is an error.
    pub fn trigger_run(&mut self, kind: RunKind) -> Option<Action> {
        if self.busy || self.code.is_empty() {
            return None;
        }

        self.busy = true;
        self.run_token += 1;

        return Some(Action::RunRequest(kind, self.code.clone(), self.run_token));
    }

    /// Busy -> Idle on a response from the service.
    pub fn handle_run_completed(&mut self, kind: RunKind, token: u64, response: ExecutionResponse) {
        if token != self.run_token {
            tracing::debug!(token, current = self.run_token, "discarding stale run result");
            return;
        }

        self.busy = false;

        if kind == RunKind::Submit {
            if let Some(submission_id) = response.submission_id {
                tracing::info!(submission_id, "submission recorded");
            }
        }

        let state = classifier::classify(&response);
        if state.is_success() {
            self.notifier.notify(Notification::success(kind.success_message()));
        } else {
            self.notifier.notify(Notification::error(kind.failure_message()));
        }

        self.output = Some(state);
    }

    /// Busy -> Idle on a transport failure. The previous output is kept
    /// rather than blanked out.
    pub fn handle_run_failed(&mut self, kind: RunKind, token: u64, error: &TransportError) {
        if token != self.run_token {
            tracing::debug!(token, current = self.run_token, "discarding stale run failure");
            return;
        }

        self.busy = false;
        tracing::error!(error = %error, "run failed in transport");
        self.notifier.notify(Notification::error(kind.failure_message()));
    }

    /// Built-in themes commit synchronously. Anything else defers the
    /// commit until the registry reports the definition loaded.
    pub fn select_theme(&mut self, descriptor: ThemeDescriptor) -> Option<Action> {
        if descriptor.is_builtin() {
            self.active_theme = descriptor;
            return None;
        }

        return Some(Action::SelectTheme(descriptor));
    }

    pub fn handle_theme_committed(&mut self, descriptor: ThemeDescriptor) {
        self.active_theme = descriptor;
    }

    /// The active theme stays as it was; the load-state rollback in the
    /// registry means selecting the theme again retries the fetch.
    pub fn handle_theme_failed(&mut self, descriptor: &ThemeDescriptor, error: &ThemeLoadError) {
        tracing::error!(theme = %descriptor.id, error = %error, "theme failed to load");
        self.notifier.notify(Notification::error(&format!(
            "Failed to load theme {}!",
            descriptor.display_name
        )));
    }
}
