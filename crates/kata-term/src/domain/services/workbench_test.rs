use std::sync::Arc;
use std::sync::Mutex;

use super::*;
use crate::domain::models::NotificationKind;
use crate::domain::models::NotificationSink;

#[derive(Clone, Default)]
struct RecordingSink {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

impl RecordingSink {
    fn last(&self) -> Option<Notification> {
        return self.notifications.lock().unwrap().last().cloned();
    }

    fn count(&self) -> usize {
        return self.notifications.lock().unwrap().len();
    }
}

fn workbench() -> (Workbench, RecordingSink) {
    let sink = RecordingSink::default();
    let workbench = Workbench::new(Box::new(sink.clone()));
    return (workbench, sink);
}

fn success_response() -> ExecutionResponse {
    return ExecutionResponse {
        exit_code: 0,
        output: "1\n".to_string(),
        memory: "1048576".to_string(),
        time: "0.1".to_string(),
        submission_id: None,
    };
}

#[test]
fn test_starts_idle_with_the_default_snippet() {
    let (workbench, sink) = workbench();

    assert!(!workbench.busy);
    assert_eq!(workbench.code, DEFAULT_SNIPPET);
    assert_eq!(workbench.output, None);
    assert_eq!(workbench.active_theme.id, "vs-dark");
    assert_eq!(sink.count(), 0);
}

#[test]
fn test_cleared_buffer_falls_back_to_the_default_snippet() {
    let (mut workbench, _sink) = workbench();

    workbench.update_code("print(1)");
    assert_eq!(workbench.code, "print(1)");

    workbench.update_code("");
    assert_eq!(workbench.code, DEFAULT_SNIPPET);
}

#[test]
fn test_trigger_with_empty_buffer_is_inert() {
    let (mut workbench, sink) = workbench();
    workbench.code = String::new();

    assert!(workbench.trigger_run(RunKind::Execute).is_none());
    assert!(!workbench.busy);
    assert_eq!(sink.count(), 0);
}

#[test]
fn test_trigger_marks_busy_and_carries_the_buffer() {
    let (mut workbench, _sink) = workbench();
    workbench.update_code("print(1)");

    let action = workbench.trigger_run(RunKind::Execute);

    assert!(workbench.busy);
    match action {
        Some(Action::RunRequest(RunKind::Execute, code, token)) => {
            assert_eq!(code, "print(1)");
            assert_eq!(token, 1);
        }
        other => panic!("unexpected action: {other:?}"),
    }
}

#[test]
fn test_trigger_while_busy_is_inert() {
    let (mut workbench, _sink) = workbench();

    assert!(workbench.trigger_run(RunKind::Execute).is_some());
    assert!(workbench.trigger_run(RunKind::Submit).is_none());
}

#[test]
fn test_successful_execute_updates_output_and_notifies() {
    let (mut workbench, sink) = workbench();
    workbench.trigger_run(RunKind::Execute);

    workbench.handle_run_completed(RunKind::Execute, 1, success_response());

    assert!(!workbench.busy);
    assert!(workbench.output.as_ref().unwrap().is_success());

    let notification = sink.last().unwrap();
    assert_eq!(notification.kind, NotificationKind::Success);
    assert_eq!(notification.message, "Compiled Successfully!");
}

#[test]
fn test_runtime_error_uses_the_submission_copy_for_submits() {
    let (mut workbench, sink) = workbench();
    workbench.trigger_run(RunKind::Submit);

    let response = ExecutionResponse {
        exit_code: 1,
        output: "NameError: name 'x' is not defined".to_string(),
        memory: "0".to_string(),
        time: "0".to_string(),
        submission_id: Some(-1),
    };
    workbench.handle_run_completed(RunKind::Submit, 1, response);

    assert!(!workbench.busy);
    assert!(matches!(
        workbench.output,
        Some(OutputState::RuntimeError { .. })
    ));

    let notification = sink.last().unwrap();
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(notification.message, "Failed to submit code!");
}

#[test]
fn test_timeout_produces_the_fixed_message_without_metrics() {
    let (mut workbench, _sink) = workbench();
    workbench.trigger_run(RunKind::Execute);

    let response = ExecutionResponse {
        exit_code: 2,
        output: String::new(),
        memory: "0".to_string(),
        time: "0".to_string(),
        submission_id: None,
    };
    workbench.handle_run_completed(RunKind::Execute, 1, response);

    let output = workbench.output.unwrap();
    assert_eq!(output.body(), "Time Limit Exceeded");
    assert_eq!(output.metrics(), None);
}

#[test]
fn test_transport_failure_keeps_the_previous_output() {
    let (mut workbench, sink) = workbench();

    workbench.trigger_run(RunKind::Execute);
    workbench.handle_run_completed(RunKind::Execute, 1, success_response());
    let before = workbench.output.clone();

    workbench.trigger_run(RunKind::Execute);
    workbench.handle_run_failed(
        RunKind::Execute,
        2,
        &TransportError::Unreachable("connection refused".to_string()),
    );

    assert!(!workbench.busy);
    assert_eq!(workbench.output, before);

    let notification = sink.last().unwrap();
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(notification.message, "Something went wrong! Please try again.");
}

#[test]
fn test_stale_results_are_discarded() {
    let (mut workbench, sink) = workbench();

    workbench.trigger_run(RunKind::Execute);
    workbench.handle_run_failed(
        RunKind::Execute,
        1,
        &TransportError::Unreachable("timed out".to_string()),
    );
    let notifications_before = sink.count();

    // A second run is in flight; the first run's response arrives late.
    workbench.trigger_run(RunKind::Execute);
    workbench.handle_run_completed(RunKind::Execute, 1, success_response());

    assert!(workbench.busy);
    assert_eq!(workbench.output, None);
    assert_eq!(sink.count(), notifications_before);

    // The current run still lands normally.
    workbench.handle_run_completed(RunKind::Execute, 2, success_response());
    assert!(!workbench.busy);
    assert!(workbench.output.is_some());
}

#[test]
fn test_edits_are_not_blocked_while_busy() {
    let (mut workbench, _sink) = workbench();

    workbench.trigger_run(RunKind::Execute);
    workbench.update_code("print(2)");

    assert!(workbench.busy);
    assert_eq!(workbench.code, "print(2)");
}

#[test]
fn test_builtin_theme_commits_synchronously() {
    let (mut workbench, _sink) = workbench();
    let light = find_theme("light").unwrap();

    let action = workbench.select_theme(light.clone());

    assert!(action.is_none());
    assert_eq!(workbench.active_theme, light);
}

#[test]
fn test_fetched_theme_commits_only_after_the_load_resolves() {
    let (mut workbench, _sink) = workbench();
    let oceanic = find_theme("oceanic-next").unwrap();

    let action = workbench.select_theme(oceanic.clone());

    assert!(matches!(action, Some(Action::SelectTheme(_))));
    assert_eq!(workbench.active_theme.id, "vs-dark");

    workbench.handle_theme_committed(oceanic.clone());
    assert_eq!(workbench.active_theme, oceanic);
}

#[test]
fn test_failed_theme_load_leaves_the_active_theme_unchanged() {
    let (mut workbench, sink) = workbench();
    let oceanic = find_theme("oceanic-next").unwrap();

    workbench.select_theme(oceanic.clone());
    workbench.handle_theme_failed(
        &oceanic,
        &ThemeLoadError::Status {
            id: oceanic.id.clone(),
            status: 404,
        },
    );

    assert_eq!(workbench.active_theme.id, "vs-dark");

    let notification = sink.last().unwrap();
    assert_eq!(notification.kind, NotificationKind::Error);
    assert!(notification.message.contains("Oceanic Next"));
}
