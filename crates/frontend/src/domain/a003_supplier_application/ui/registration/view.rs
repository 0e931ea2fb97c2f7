use super::view_model::{field_options, SupplierRegistrationVm};
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{form_field, Button, ButtonSize};
use crate::shared::form_submit::after_registration;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_FORM;
use crate::shared::toast::use_toasts;
use contracts::domain::a003_supplier_application::SupplierRegistrationField;
use contracts::shared::form::FormField;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn SupplierRegistration(
    on_back: Callback<()>,
    #[prop(optional)]
    on_registration_complete: Option<Callback<()>>,
) -> impl IntoView {
    let vm = SupplierRegistrationVm::new(use_toasts());
    let form = vm.form;
    let on_done = after_registration(on_registration_complete, on_back);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_command(on_done);
    };

    view! {
        <PageFrame page_id="a003_supplier_application--form" category=PAGE_CAT_FORM>
            <div class="page__header">
                <PageHeader title="Supplier Registration" on_back=on_back />
            </div>

            <div class="page__content page__content--narrow">
                <CardAnimated class="form-card">
                    <div class="form-card__intro">
                        <div class="form-card__icon">{icon("building")}</div>
                        <h2 class="form-card__title">"Register as a Supplier"</h2>
                        <p class="text-muted">
                            "Join our platform to connect with vendors and expand your business reach"
                        </p>
                    </div>

                    <form class="form" on:submit=on_submit>
                        <div class="form__grid">
                            {SupplierRegistrationField::all()
                                .iter()
                                .map(|f| form_field(form, *f, field_options(*f)))
                                .collect_view()}
                        </div>

                        <Button submit=true size=ButtonSize::Large block=true>
                            "Register as Supplier"
                        </Button>
                    </form>
                </CardAnimated>
            </div>
        </PageFrame>
    }
}
