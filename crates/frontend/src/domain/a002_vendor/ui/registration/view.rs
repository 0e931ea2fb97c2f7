use super::view_model::{field_options, VendorRegistrationVm, SECTIONS};
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{form_field, Button, ButtonSize};
use crate::shared::form_submit::after_registration;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_FORM;
use crate::shared::toast::use_toasts;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn VendorRegistration(
    on_back: Callback<()>,
    #[prop(optional)]
    on_registration_complete: Option<Callback<()>>,
) -> impl IntoView {
    let vm = VendorRegistrationVm::new(use_toasts());
    let form = vm.form;
    let on_done = after_registration(on_registration_complete, on_back);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_command(on_done);
    };

    view! {
        <PageFrame page_id="a002_vendor--form" category=PAGE_CAT_FORM>
            <div class="page__header">
                <PageHeader title="Vendor Registration" on_back=on_back />
            </div>

            <div class="page__content page__content--narrow">
                <CardAnimated class="form-card">
                    <div class="form-card__intro">
                        <h2 class="form-card__title">"Join VendorConnect"</h2>
                        <p class="text-muted">
                            "Start connecting with affordable suppliers and grow your business"
                        </p>
                    </div>

                    <form class="form" on:submit=on_submit>
                        {SECTIONS
                            .iter()
                            .map(|(title, icon_name, fields)| view! {
                                <section class="form__section">
                                    <h3 class="form__section-title">{icon(icon_name)}{*title}</h3>
                                    <div class="form__grid">
                                        {fields
                                            .iter()
                                            .map(|f| form_field(form, *f, field_options(*f)))
                                            .collect_view()}
                                    </div>
                                </section>
                            })
                            .collect_view()}

                        <Button submit=true size=ButtonSize::Large block=true>
                            "Complete Registration"
                        </Button>
                    </form>
                </CardAnimated>
            </div>
        </PageFrame>
    }
}
