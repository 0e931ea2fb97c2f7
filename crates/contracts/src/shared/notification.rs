use serde::{Deserialize, Serialize};

/// Short message shown to the user after an action completes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Anything that can display a [`Notification`]
pub trait NotificationSink {
    fn notify(&self, notification: Notification);
}

/// Sink that keeps every notification, for tests and previews
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub received: std::cell::RefCell<Vec<Notification>>,
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        self.received.borrow_mut().push(notification);
    }
}

impl RecordingSink {
    pub fn titles(&self) -> Vec<String> {
        self.received.borrow().iter().map(|n| n.title.clone()).collect()
    }
}
