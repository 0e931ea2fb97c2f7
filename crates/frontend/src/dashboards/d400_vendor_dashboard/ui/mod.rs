//! Vendor dashboard: messages, profile and budget tabs.

mod budget_tab;
mod dashboard;
mod messages_tab;
mod profile_tab;
mod view_model;

pub use dashboard::VendorDashboard;
pub use view_model::{ReplyDrafts, VendorDashboardVm};
