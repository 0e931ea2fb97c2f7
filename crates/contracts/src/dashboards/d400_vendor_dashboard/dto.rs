use crate::domain::a001_supplier::aggregate::parse_dollars;
use crate::shared::notification::Notification;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Message from a supplier in the vendor inbox
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierMessage {
    pub id: u32,
    pub supplier: String,
    pub message: String,
    /// When the message arrived
    pub received_at: DateTime<Utc>,
    pub unread: bool,
}

impl SupplierMessage {
    /// "2 hours ago", "1 day ago" relative to `now`
    pub fn received_label(&self, now: DateTime<Utc>) -> String {
        format_relative(now.signed_duration_since(self.received_at))
    }
}

/// Inbox the dashboard starts with, timestamped relative to `now`
pub fn sample_messages(now: DateTime<Utc>) -> Vec<SupplierMessage> {
    vec![
        SupplierMessage {
            id: 1,
            supplier: "Fresh Fruits Co.".into(),
            message: "Interested in your bulk orange order. Can offer 15% discount for 500kg+"
                .into(),
            received_at: now - Duration::hours(2),
            unread: true,
        },
        SupplierMessage {
            id: 2,
            supplier: "Vegetable Mart".into(),
            message: "Thank you for your inquiry. Our current rates are competitive.".into(),
            received_at: now - Duration::days(1),
            unread: false,
        },
        SupplierMessage {
            id: 3,
            supplier: "Spice Trading Hub".into(),
            message: "We have the spices you requested in stock. Ready for immediate delivery."
                .into(),
            received_at: now - Duration::days(2),
            unread: false,
        },
    ]
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}

/// Coarse human readable age. Negative durations count as "just now".
pub fn format_relative(elapsed: Duration) -> String {
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        plural(minutes, "minute")
    } else if elapsed.num_hours() < 24 {
        plural(elapsed.num_hours(), "hour")
    } else {
        plural(elapsed.num_days(), "day")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub label: String,
    /// Whole dollars
    pub amount: u32,
}

impl Expense {
    pub fn new(label: impl Into<String>, amount: u32) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

pub fn sample_expenses() -> Vec<Expense> {
    vec![
        Expense::new("Fresh Fruits Co. - Oranges", 450),
        Expense::new("Vegetable Mart - Mixed Vegetables", 320),
        Expense::new("Spice Trading Hub - Spices", 180),
    ]
}

/// Initial value of the budget input
pub const DEFAULT_MONTHLY_BUDGET: &str = "5000";

/// Monthly budget figures shown on the budget tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub budget: i64,
    pub spent: i64,
    /// May go negative when spending exceeds the budget
    pub remaining: i64,
}

impl BudgetSummary {
    /// Cents are dropped (`"2500.50"` is 2500). Empty, negative or
    /// non-numeric budget input counts as zero.
    pub fn compute(budget_input: &str, expenses: &[Expense]) -> Self {
        let budget = parse_dollars(budget_input).map_or(0, i64::from);
        let spent: i64 = expenses.iter().map(|e| i64::from(e.amount)).sum();
        Self {
            budget,
            spent,
            remaining: budget - spent,
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining < 0
    }
}

/// Formats whole dollars with thousands separators: `$1,250`, `-$40`
pub fn format_dollars(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

pub fn reply_sent_notification() -> Notification {
    Notification::new("Message Sent", "Your message has been sent to the supplier.")
}

pub fn budget_updated_notification(budget_input: &str) -> Notification {
    Notification::new(
        "Budget Updated",
        format!("Your monthly budget has been set to ${}.", budget_input.trim()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_sample_messages_labels() {
        let now = fixed_now();
        let labels: Vec<String> = sample_messages(now)
            .iter()
            .map(|m| m.received_label(now))
            .collect();
        assert_eq!(labels, ["2 hours ago", "1 day ago", "2 days ago"]);
    }

    #[test]
    fn test_only_first_message_unread() {
        let unread: Vec<u32> = sample_messages(fixed_now())
            .iter()
            .filter(|m| m.unread)
            .map(|m| m.id)
            .collect();
        assert_eq!(unread, [1]);
    }

    #[test]
    fn test_format_relative() {
        assert_eq!(format_relative(Duration::seconds(-5)), "just now");
        assert_eq!(format_relative(Duration::seconds(30)), "just now");
        assert_eq!(format_relative(Duration::minutes(1)), "1 minute ago");
        assert_eq!(format_relative(Duration::minutes(45)), "45 minutes ago");
        assert_eq!(format_relative(Duration::minutes(60)), "1 hour ago");
        assert_eq!(format_relative(Duration::hours(23)), "23 hours ago");
        assert_eq!(format_relative(Duration::hours(49)), "2 days ago");
    }

    #[test]
    fn test_budget_summary_default() {
        let summary = BudgetSummary::compute(DEFAULT_MONTHLY_BUDGET, &sample_expenses());
        assert_eq!(summary.budget, 5000);
        assert_eq!(summary.spent, 950);
        assert_eq!(summary.remaining, 4050);
        assert!(!summary.is_over_budget());
    }

    #[test]
    fn test_budget_summary_invalid_input() {
        let expenses = sample_expenses();
        for input in ["", "abc", "-200"] {
            let summary = BudgetSummary::compute(input, &expenses);
            assert_eq!(summary.budget, 0, "input {:?}", input);
            assert_eq!(summary.remaining, -950);
            assert!(summary.is_over_budget());
        }
    }

    #[test]
    fn test_budget_summary_drops_cents() {
        let summary = BudgetSummary::compute("2500.50", &sample_expenses());
        assert_eq!(summary.budget, 2500);
        assert_eq!(summary.remaining, 1550);
        assert!(!summary.is_over_budget());
    }

    #[test]
    fn test_format_dollars() {
        assert_eq!(format_dollars(0), "$0");
        assert_eq!(format_dollars(950), "$950");
        assert_eq!(format_dollars(4050), "$4,050");
        assert_eq!(format_dollars(1_234_567), "$1,234,567");
        assert_eq!(format_dollars(-950), "-$950");
    }

    #[test]
    fn test_budget_notification_uses_input() {
        let n = budget_updated_notification(" 7500 ");
        assert_eq!(n.description, "Your monthly budget has been set to $7500.");
    }
}
