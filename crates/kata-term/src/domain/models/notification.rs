#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A fire-and-forget toast. `auto_close_ms` is how long the sink should keep
/// it visible; `None` leaves that to the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub auto_close_ms: Option<u64>,
}

impl Notification {
    pub fn success(message: &str) -> Notification {
        return Notification {
            kind: NotificationKind::Success,
            message: message.to_string(),
            auto_close_ms: Some(1000),
        };
    }

    pub fn error(message: &str) -> Notification {
        return Notification {
            kind: NotificationKind::Error,
            message: message.to_string(),
            auto_close_ms: Some(1000),
        };
    }
}

/// Notification sink collaborator. No acknowledgment, no failure surface.
pub trait NotificationSink: Send {
    fn notify(&self, notification: Notification);
}

pub type NotificationSinkBox = Box<dyn NotificationSink>;
