pub mod dto;

pub use dto::{
    budget_updated_notification, format_dollars, format_relative, reply_sent_notification,
    sample_expenses, sample_messages, BudgetSummary, Expense, SupplierMessage,
    DEFAULT_MONTHLY_BUDGET,
};
