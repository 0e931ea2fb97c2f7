use crate::app::use_config;
use crate::layout::global_context::use_app_context;
use crate::routes::view_state::NavAction;
use crate::shared::components::ui::{Button, ButtonVariant};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Site header shown on the home page
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let brand = use_config().brand_name;

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__logo">{icon("cart")}</span>
                <span class="header__title">{brand}</span>
            </div>
            <div class="header__actions">
                {move || {
                    if ctx.is_registered_vendor() {
                        view! {
                            <Button variant=ButtonVariant::Outline on_click=Callback::new(move |_| ctx.dispatch(NavAction::OpenDashboard))>
                                "Dashboard"
                            </Button>
                        }
                        .into_any()
                    } else {
                        view! {
                            <Button variant=ButtonVariant::Outline on_click=Callback::new(move |_| ctx.dispatch(NavAction::StartAsVendor))>
                                "Join as Vendor"
                            </Button>
                        }
                        .into_any()
                    }
                }}
                <Button on_click=Callback::new(move |_| ctx.dispatch(NavAction::JoinAsSupplier))>
                    "Join as Supplier"
                </Button>
            </div>
        </header>
    }
}
