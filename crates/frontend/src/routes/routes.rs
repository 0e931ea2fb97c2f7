use crate::dashboards::d400_vendor_dashboard::ui::VendorDashboard;
use crate::domain::a001_supplier::ui::SupplierDirectory;
use crate::domain::a002_vendor::ui::registration::VendorRegistration;
use crate::domain::a003_supplier_application::ui::registration::SupplierRegistration;
use crate::layout::global_context::use_app_context;
use crate::routes::view_state::{AppView, NavAction};
use crate::system::pages::home::HomePage;
use leptos::prelude::*;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_app_context();
    // Memo so that only real view changes remount the page
    let current = Memo::new(move |_| ctx.current_view());

    move || match current.get() {
        AppView::Home => view! { <HomePage /> }.into_any(),
        AppView::VendorRegistration => view! {
            <VendorRegistration
                on_back=ctx.action(NavAction::Back)
                on_registration_complete=ctx.action(NavAction::VendorRegistered)
            />
        }
        .into_any(),
        AppView::SupplierRegistration => view! {
            <SupplierRegistration
                on_back=ctx.action(NavAction::Back)
                on_registration_complete=ctx.action(NavAction::SupplierRegistered)
            />
        }
        .into_any(),
        AppView::SupplierDirectory => view! {
            <SupplierDirectory on_back=ctx.action(NavAction::Back) />
        }
        .into_any(),
        AppView::VendorDashboard => view! {
            <VendorDashboard on_back=ctx.action(NavAction::Back) />
        }
        .into_any(),
    }
}
