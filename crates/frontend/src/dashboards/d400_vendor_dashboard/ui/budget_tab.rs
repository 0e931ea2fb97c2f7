use super::view_model::VendorDashboardVm;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::ui::{Button, Input};
use crate::shared::icons::icon;
use contracts::dashboards::d400_vendor_dashboard::format_dollars;
use contracts::shared::form::InputKind;
use leptos::prelude::*;

#[component]
pub fn BudgetTab(vm: VendorDashboardVm) -> impl IntoView {
    let summary = Memo::new(move |_| vm.budget_summary());

    view! {
        <CardAnimated class="details-card">
            <h3 class="details-card__title">{icon("wallet")}"Budget Management"</h3>

            <Input
                label="Monthly Budget ($)"
                id="monthlyBudget"
                kind=InputKind::Number
                placeholder="Enter your monthly budget"
                value=vm.budget_input
                on_input=Callback::new(move |v: String| vm.budget_input.set(v))
            />

            <div class="stat-grid">
                <StatCard
                    label="Monthly Budget"
                    icon_name="dollar"
                    amount=Signal::derive(move || summary.get().budget)
                />
                <StatCard
                    label="Spent This Month"
                    icon_name="trending-up"
                    amount=Signal::derive(move || summary.get().spent)
                />
                <StatCard
                    label="Remaining"
                    icon_name="wallet"
                    amount=Signal::derive(move || summary.get().remaining)
                    tone=Signal::derive(move || StatTone::for_balance(summary.get().remaining))
                />
            </div>

            <h4 class="details-card__subtitle">{icon("calendar")}"Recent Expenses"</h4>
            <ul class="expense-list">
                {vm.expenses.with_value(|expenses| {
                    expenses
                        .iter()
                        .map(|e| view! {
                            <li class="expense-list__item">
                                <span>{e.label.clone()}</span>
                                <strong>{format_dollars(i64::from(e.amount))}</strong>
                            </li>
                        })
                        .collect_view()
                })}
            </ul>

            <Button block=true on_click=Callback::new(move |_| vm.update_budget_command())>
                "Update Budget"
            </Button>
        </CardAnimated>
    }
}
