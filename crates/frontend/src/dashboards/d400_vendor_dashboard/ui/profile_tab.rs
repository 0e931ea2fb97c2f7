use super::view_model::VendorDashboardVm;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::ui::{form_field, Button};
use crate::shared::icons::icon;
use contracts::domain::a002_vendor::VendorProfileField;
use contracts::shared::form::FormField;
use leptos::prelude::*;

#[component]
pub fn ProfileTab(vm: VendorDashboardVm) -> impl IntoView {
    view! {
        <CardAnimated class="details-card">
            <h3 class="details-card__title">{icon("user")}"Profile Information"</h3>
            <div class="form__grid">
                {VendorProfileField::all()
                    .iter()
                    .map(|f| form_field(vm.profile, *f, Vec::new()))
                    .collect_view()}
            </div>
            <Button block=true on_click=Callback::new(move |_| vm.update_profile_command())>
                "Update Profile"
            </Button>
        </CardAnimated>
    }
}
