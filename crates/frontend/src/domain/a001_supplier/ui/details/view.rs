use super::view_model::{key_information, policy_rows, since_label, SupplierDetailsVm};
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Badge, BadgeTone, Button};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a001_supplier::SupplierId;
use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

#[component]
pub fn SupplierDetailsPage(
    id: SupplierId,
    on_contact: Callback<SupplierId>,
    on_back: Callback<()>,
) -> impl IntoView {
    let vm = SupplierDetailsVm::load(id);
    let details = vm.details();
    let record = &details.record;
    let contact = move |_: leptos::ev::MouseEvent| on_contact.run(vm.shown_id());

    view! {
        <PageFrame page_id="a001_supplier--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <PageHeader title="Supplier Details" on_back=on_back>
                    <Button on_click=Callback::new(contact)>
                        {icon("message")}
                        "Contact Supplier"
                    </Button>
                </PageHeader>
            </div>

            {vm.fallback_message().map(|message| view! {
                <MessageBar intent=MessageBarIntent::Warning>
                    <span>{message}</span>
                </MessageBar>
            })}

            <div class="page__content details-layout">
                <div class="details-layout__main">
                    <CardAnimated class="details-card">
                        <div class="details-card__head">
                            <div>
                                <h2 class="details-card__name">{record.name.clone()}</h2>
                                <div class="supplier-card__location">
                                    {icon("map-pin")}
                                    {record.location.clone()}
                                </div>
                                <div class="supplier-card__fact">
                                    <span class="supplier-card__star">{icon("star")}</span>
                                    <strong>{record.rating_label()}</strong>
                                    <span class="text-muted">{format!("({} reviews)", record.reviews)}</span>
                                    <Badge>{since_label(details.year_established)}</Badge>
                                </div>
                            </div>
                            <div class="details-card__badges">
                                {record.verified.then(|| view! {
                                    <Badge tone=BadgeTone::Success>{icon("shield")}"Verified"</Badge>
                                })}
                                {record.group_buying.then(|| view! {
                                    <Badge tone=BadgeTone::Brand>{icon("users")}"Group Buying"</Badge>
                                })}
                            </div>
                        </div>
                        <p class="details-card__about">{details.about.clone()}</p>
                    </CardAnimated>

                    <CardAnimated delay_ms=50 class="details-card">
                        <h3 class="details-card__title">"Key Information"</h3>
                        <dl class="info-grid">
                            {key_information(details)
                                .into_iter()
                                .map(|(label, value)| view! {
                                    <div class="info-grid__item">
                                        <dt class="info-grid__label">{label}</dt>
                                        <dd class="info-grid__value">{value}</dd>
                                    </div>
                                })
                                .collect_view()}
                        </dl>
                    </CardAnimated>

                    <CardAnimated delay_ms=100 class="details-card">
                        <h3 class="details-card__title">{icon("package")}"Specialties & Products"</h3>
                        <div class="chip-grid">
                            {details.specialties
                                .iter()
                                .map(|s| view! { <div class="chip">{s.clone()}</div> })
                                .collect_view()}
                        </div>
                    </CardAnimated>

                    <CardAnimated delay_ms=150 class="details-card">
                        <h3 class="details-card__title">"Policies & Terms"</h3>
                        {policy_rows(details)
                            .into_iter()
                            .map(|(label, value)| view! {
                                <div class="policy">
                                    <h4 class="policy__title">{label}</h4>
                                    <p class="policy__text">{value}</p>
                                </div>
                            })
                            .collect_view()}
                    </CardAnimated>
                </div>

                <aside class="details-layout__side">
                    <CardAnimated delay_ms=50 class="details-card">
                        <h3 class="details-card__title">"Contact Information"</h3>
                        <div class="contact-line">{icon("phone")}{details.phone.clone()}</div>
                        <div class="contact-line">{icon("mail")}{details.email.clone()}</div>
                        <div class="contact-line">{icon("map-pin")}{details.address.clone()}</div>
                        <Button block=true on_click=Callback::new(contact)>
                            {icon("send")}
                            "Send Message"
                        </Button>
                    </CardAnimated>

                    <SideList delay_ms=100 title="Certifications" icon_name="award" items=details.certifications.clone() />
                    <SideList delay_ms=150 title="Payment Methods" icon_name="wallet" items=details.payment_methods.clone() />
                    <SideList delay_ms=200 title="Delivery Areas" icon_name="truck" items=details.delivery_areas.clone() />
                </aside>
            </div>
        </PageFrame>
    }
}

#[component]
fn SideList(
    delay_ms: u32,
    title: &'static str,
    icon_name: &'static str,
    items: Vec<String>,
) -> impl IntoView {
    view! {
        <CardAnimated delay_ms=delay_ms class="details-card">
            <h3 class="details-card__title">{icon(icon_name)}{title}</h3>
            <ul class="side-list">
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
        </CardAnimated>
    }
}
