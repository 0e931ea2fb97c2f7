//! Toast notifications.
//!
//! [`ToastService`] is the browser [`NotificationSink`]: controllers push
//! notifications into it, [`ToastHost`] (mounted once at the root) renders
//! the stack.

use crate::shared::icons::icon;
use contracts::shared::notification::{Notification, NotificationSink};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub notification: Notification,
}

/// Bounded toast stack, newest last
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastStack {
    entries: Vec<ToastEntry>,
    next_id: u64,
}

impl ToastStack {
    /// Pushes a toast, dropping the oldest ones beyond `limit`
    pub fn push(&mut self, notification: Notification, limit: usize) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(ToastEntry { id, notification });
        let limit = limit.max(1);
        if self.entries.len() > limit {
            let overflow = self.entries.len() - limit;
            self.entries.drain(..overflow);
        }
        id
    }

    /// Returns false when the toast was already gone
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[ToastEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Clone, Copy)]
pub struct ToastService {
    stack: RwSignal<ToastStack>,
    limit: usize,
    duration_ms: u32,
}

impl ToastService {
    pub fn new(limit: usize, duration_ms: u32) -> Self {
        Self {
            stack: RwSignal::new(ToastStack::default()),
            limit,
            duration_ms,
        }
    }

    pub fn push(&self, notification: Notification) -> u64 {
        log::debug!("toast: {}", notification.title);
        let mut id = 0;
        self.stack
            .update(|s| id = s.push(notification, self.limit));

        let svc = *self;
        let delay = self.duration_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            svc.dismiss(id);
        });
        id
    }

    pub fn dismiss(&self, id: u64) {
        // The host may already be gone when a timer fires late
        let removed = self
            .stack
            .try_update(|s| s.dismiss(id))
            .unwrap_or(false);
        if removed {
            log::debug!("toast {} dismissed", id);
        }
    }
}

impl NotificationSink for ToastService {
    fn notify(&self, notification: Notification) {
        self.push(notification);
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>()
        .expect("ToastService not provided in context (provide it in app root)")
}

/// Renders the toast stack at the application root.
///
/// Must be mounted exactly once.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_toasts();

    view! {
        <div class="toast-region" role="status" aria-live="polite">
            <For
                each=move || svc.stack.with(|s| s.entries().to_vec())
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    view! {
                        <div class="toast">
                            <div class="toast__body">
                                <div class="toast__title">{entry.notification.title}</div>
                                <div class="toast__description">{entry.notification.description}</div>
                            </div>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| svc.dismiss(id)
                            >
                                {icon("close")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(title: &str) -> Notification {
        Notification::new(title, "")
    }

    fn titles(stack: &ToastStack) -> Vec<&str> {
        stack
            .entries()
            .iter()
            .map(|e| e.notification.title.as_str())
            .collect()
    }

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut stack = ToastStack::default();
        let a = stack.push(n("a"), 3);
        let b = stack.push(n("b"), 3);
        assert!(b > a);
        assert_eq!(titles(&stack), ["a", "b"]);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut stack = ToastStack::default();
        for t in ["1", "2", "3", "4", "5"] {
            stack.push(n(t), 3);
        }
        assert_eq!(titles(&stack), ["3", "4", "5"]);
    }

    #[test]
    fn test_zero_limit_keeps_latest() {
        let mut stack = ToastStack::default();
        stack.push(n("old"), 0);
        stack.push(n("new"), 0);
        assert_eq!(titles(&stack), ["new"]);
    }

    #[test]
    fn test_dismiss() {
        let mut stack = ToastStack::default();
        let a = stack.push(n("a"), 3);
        stack.push(n("b"), 3);
        assert!(stack.dismiss(a));
        assert!(!stack.dismiss(a));
        assert_eq!(titles(&stack), ["b"]);
        assert_eq!(stack.len(), 1);
    }
}
