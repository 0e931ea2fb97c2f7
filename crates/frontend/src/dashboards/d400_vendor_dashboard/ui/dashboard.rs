use super::budget_tab::BudgetTab;
use super::messages_tab::MessagesTab;
use super::profile_tab::ProfileTab;
use super::view_model::{VendorDashboardVm, TAB_BUDGET, TAB_MESSAGES, TAB_PROFILE};
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::toast::use_toasts;
use leptos::prelude::*;
use thaw::{Tab, TabList};

/// Vendor dashboard. All state is local and dropped on leave.
#[component]
pub fn VendorDashboard(on_back: Callback<()>) -> impl IntoView {
    let vm = VendorDashboardVm::new(use_toasts());

    view! {
        <PageFrame page_id="d400_vendor_dashboard--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <PageHeader
                    title="Vendor Dashboard"
                    subtitle=Signal::derive(move || vm.greeting())
                    on_back=on_back
                >
                    <div class="avatar">{move || vm.initials()}</div>
                </PageHeader>
            </div>

            <div class="page__content">
                <TabList selected_value=vm.active_tab>
                    <Tab value=TAB_MESSAGES>{icon("message")}"Messages"</Tab>
                    <Tab value=TAB_PROFILE>{icon("user")}"Profile"</Tab>
                    <Tab value=TAB_BUDGET>{icon("dollar")}"Budget"</Tab>
                </TabList>

                <div class="tab-content">
                    {move || match vm.active_tab.get().as_str() {
                        TAB_PROFILE => view! { <ProfileTab vm=vm /> }.into_any(),
                        TAB_BUDGET => view! { <BudgetTab vm=vm /> }.into_any(),
                        _ => view! { <MessagesTab vm=vm /> }.into_any(),
                    }}
                </div>
            </div>
        </PageFrame>
    }
}
