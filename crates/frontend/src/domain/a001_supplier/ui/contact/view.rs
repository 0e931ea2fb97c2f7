use super::view_model::{
    field_options, ContactSupplierVm, CONTACT_DETAILS_FIELDS, INQUIRY_DETAILS_FIELDS, QUOTE_TIPS,
};
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{form_field, Button, ButtonSize};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_FORM;
use crate::shared::toast::use_toasts;
use contracts::domain::a001_supplier::SupplierId;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn ContactSupplier(id: SupplierId, on_back: Callback<()>) -> impl IntoView {
    let vm = ContactSupplierVm::new(id, use_toasts());
    let supplier = vm.supplier();
    let form = vm.form;

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };

    view! {
        <PageFrame page_id="a001_supplier--form" category=PAGE_CAT_FORM>
            <div class="page__header">
                <PageHeader title="Contact Supplier" subtitle=supplier.name().to_string() on_back=on_back />
            </div>

            <div class="page__content details-layout">
                <div class="details-layout__main">
                    <CardAnimated class="details-card">
                        <form class="form" on:submit=on_submit>
                            <h3 class="details-card__title">{icon("user")}"Your Information"</h3>
                            <div class="form__grid">
                                {CONTACT_DETAILS_FIELDS
                                    .iter()
                                    .map(|f| form_field(form, *f, field_options(*f)))
                                    .collect_view()}
                            </div>

                            <h3 class="details-card__title">{icon("package")}"Inquiry Details"</h3>
                            <div class="form__grid">
                                {INQUIRY_DETAILS_FIELDS
                                    .iter()
                                    .map(|f| form_field(form, *f, field_options(*f)))
                                    .collect_view()}
                            </div>

                            <div class="form__actions">
                                <Button submit=true size=ButtonSize::Large block=true>
                                    {icon("send")}
                                    "Send Inquiry"
                                </Button>
                            </div>
                        </form>
                    </CardAnimated>
                </div>

                <aside class="details-layout__side">
                    <CardAnimated delay_ms=50 class="details-card">
                        <h3 class="details-card__title">"Supplier Information"</h3>
                        <div class="details-card__name">{supplier.name().to_string()}</div>
                        <div class="text-muted">{supplier.record.category.to_string()}</div>
                        <div class="contact-line">{icon("phone")}{supplier.phone.clone()}</div>
                        <div class="contact-line">{icon("mail")}{supplier.email.clone()}</div>
                    </CardAnimated>

                    <CardAnimated delay_ms=100 class="details-card">
                        <h3 class="details-card__title">"Tips for Better Quotes"</h3>
                        <ul class="side-list">
                            {QUOTE_TIPS.iter().map(|tip| view! { <li>{*tip}</li> }).collect_view()}
                        </ul>
                    </CardAnimated>

                    <CardAnimated delay_ms=150 class="details-card response-time">
                        <div class="response-time__icon">{icon("clock")}</div>
                        <div class="response-time__value">"24 hrs"</div>
                        <div class="text-muted">"Average response time"</div>
                    </CardAnimated>
                </aside>
            </div>
        </PageFrame>
    }
}
