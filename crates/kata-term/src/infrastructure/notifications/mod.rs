use tokio::sync::mpsc;

use crate::domain::models::Event;
use crate::domain::models::Notification;
use crate::domain::models::NotificationSink;

/// Forwards notifications into the event channel so the UI loop renders
/// them as toasts. Fire-and-forget: a closed channel means the UI is gone
/// and there is nobody left to notify.
pub struct ChannelNotifier {
    event_tx: mpsc::UnboundedSender<Event>,
}

impl ChannelNotifier {
    pub fn new(event_tx: mpsc::UnboundedSender<Event>) -> ChannelNotifier {
        return ChannelNotifier { event_tx };
    }
}

impl NotificationSink for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        let _ = self.event_tx.send(Event::Notify(notification));
    }
}
