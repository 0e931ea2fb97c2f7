use crate::shared::toast::ToastService;
use chrono::{DateTime, Utc};
use contracts::dashboards::d400_vendor_dashboard::{
    budget_updated_notification, reply_sent_notification, sample_expenses, sample_messages,
    BudgetSummary, Expense, SupplierMessage, DEFAULT_MONTHLY_BUDGET,
};
use contracts::domain::a002_vendor::VendorProfile;
use contracts::shared::notification::NotificationSink;
use leptos::prelude::*;
use std::collections::HashMap;

pub const TAB_MESSAGES: &str = "messages";
pub const TAB_PROFILE: &str = "profile";
pub const TAB_BUDGET: &str = "budget";

/// Unsent reply text, one draft per message
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplyDrafts {
    drafts: HashMap<u32, String>,
}

impl ReplyDrafts {
    pub fn get(&self, message_id: u32) -> String {
        self.drafts.get(&message_id).cloned().unwrap_or_default()
    }

    pub fn set(&mut self, message_id: u32, text: String) {
        if text.is_empty() {
            self.drafts.remove(&message_id);
        } else {
            self.drafts.insert(message_id, text);
        }
    }

    /// Removes and returns the trimmed draft, `None` for a blank one.
    /// A blank draft is left untouched.
    pub fn take_sendable(&mut self, message_id: u32) -> Option<String> {
        let trimmed = self.drafts.get(&message_id)?.trim().to_string();
        if trimmed.is_empty() {
            return None;
        }
        self.drafts.remove(&message_id);
        Some(trimmed)
    }
}

/// Sends the reply drafted for `message_id`. Blank drafts are ignored.
pub fn send_reply(drafts: &mut ReplyDrafts, message_id: u32, sink: &dyn NotificationSink) -> bool {
    match drafts.take_sendable(message_id) {
        Some(reply) => {
            log::info!("reply to message {} ({} chars)", message_id, reply.len());
            sink.notify(reply_sent_notification());
            true
        }
        None => {
            log::debug!("empty reply to message {} ignored", message_id);
            false
        }
    }
}

pub fn update_profile(profile: &VendorProfile, sink: &dyn NotificationSink) {
    log::info!("profile updated for {}", profile.business_name);
    sink.notify(VendorProfile::updated_notification());
}

pub fn update_budget(budget_input: &str, sink: &dyn NotificationSink) {
    log::info!("monthly budget set to {}", budget_input.trim());
    sink.notify(budget_updated_notification(budget_input));
}

#[derive(Clone, Copy)]
pub struct VendorDashboardVm {
    pub active_tab: RwSignal<String>,
    pub messages: StoredValue<Vec<SupplierMessage>>,
    pub drafts: RwSignal<ReplyDrafts>,
    pub profile: RwSignal<VendorProfile>,
    pub budget_input: RwSignal<String>,
    pub expenses: StoredValue<Vec<Expense>>,
    /// Reference time for the "N hours ago" labels
    pub opened_at: DateTime<Utc>,
    toasts: ToastService,
}

impl VendorDashboardVm {
    pub fn new(toasts: ToastService) -> Self {
        let now = Utc::now();
        Self {
            active_tab: RwSignal::new(TAB_MESSAGES.to_string()),
            messages: StoredValue::new(sample_messages(now)),
            drafts: RwSignal::new(ReplyDrafts::default()),
            profile: RwSignal::new(VendorProfile::sample()),
            budget_input: RwSignal::new(DEFAULT_MONTHLY_BUDGET.to_string()),
            expenses: StoredValue::new(sample_expenses()),
            opened_at: now,
            toasts,
        }
    }

    pub fn budget_summary(&self) -> BudgetSummary {
        let input = self.budget_input.get();
        self.expenses.with_value(|e| BudgetSummary::compute(&input, e))
    }

    pub fn greeting(&self) -> String {
        self.profile.with(|p| p.greeting())
    }

    pub fn initials(&self) -> String {
        self.profile.with(|p| p.initials())
    }

    pub fn draft(&self, message_id: u32) -> String {
        self.drafts.with(|d| d.get(message_id))
    }

    pub fn set_draft(&self, message_id: u32, text: String) {
        self.drafts.update(|d| d.set(message_id, text));
    }

    pub fn send_reply_command(&self, message_id: u32) {
        let mut drafts = self.drafts.get_untracked();
        if send_reply(&mut drafts, message_id, &self.toasts) {
            self.drafts.set(drafts);
        }
    }

    pub fn update_profile_command(&self) {
        self.profile
            .with_untracked(|p| update_profile(p, &self.toasts));
    }

    pub fn update_budget_command(&self) {
        self.budget_input
            .with_untracked(|b| update_budget(b, &self.toasts));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::notification::RecordingSink;

    #[test]
    fn test_drafts_are_per_message() {
        let mut drafts = ReplyDrafts::default();
        drafts.set(1, "Deal".into());
        drafts.set(2, "Send rates please".into());
        assert_eq!(drafts.get(1), "Deal");
        assert_eq!(drafts.get(2), "Send rates please");
        assert_eq!(drafts.get(3), "");
    }

    #[test]
    fn test_send_reply_clears_only_that_draft() {
        let sink = RecordingSink::default();
        let mut drafts = ReplyDrafts::default();
        drafts.set(1, "  500kg works for us  ".into());
        drafts.set(2, "Later".into());

        assert!(send_reply(&mut drafts, 1, &sink));
        assert_eq!(drafts.get(1), "");
        assert_eq!(drafts.get(2), "Later");
        assert_eq!(sink.titles(), ["Message Sent"]);
    }

    #[test]
    fn test_blank_reply_is_ignored() {
        let sink = RecordingSink::default();
        let mut drafts = ReplyDrafts::default();
        assert!(!send_reply(&mut drafts, 1, &sink));

        drafts.set(1, "   ".into());
        assert!(!send_reply(&mut drafts, 1, &sink));
        assert_eq!(drafts.get(1), "   ");
        assert!(sink.titles().is_empty());
    }

    #[test]
    fn test_profile_and_budget_notifications() {
        let sink = RecordingSink::default();
        update_profile(&VendorProfile::sample(), &sink);
        update_budget(" 7500 ", &sink);

        assert_eq!(sink.titles(), ["Profile Updated", "Budget Updated"]);
        assert_eq!(
            sink.received.borrow()[1].description,
            "Your monthly budget has been set to $7500."
        );
    }
}
