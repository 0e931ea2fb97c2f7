pub mod state;

use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Badge, BadgeTone, Button, ButtonVariant, Input, Select};
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_supplier::{catalog, SupplierFilter, SupplierId, SupplierRecord};
use leptos::prelude::*;
use thaw::{Flex, FlexAlign, FlexGap};

#[component]
pub fn SupplierList(
    filter: RwSignal<SupplierFilter>,
    on_details: Callback<SupplierId>,
    on_contact: Callback<SupplierId>,
    on_back: Callback<()>,
) -> impl IntoView {
    let results = Memo::new(move |_| filter.with(|f| f.apply(catalog()).to_owned_records()));
    let summary = Memo::new(move |_| filter.with(|f| f.apply(catalog()).summary()));
    let query = Signal::derive(move || filter.with(|f| f.query.clone()));

    view! {
        <PageFrame page_id="a001_supplier--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <PageHeader title="Supplier Directory" subtitle=summary on_back=on_back />
            </div>

            <div class="page__content">
                <CardAnimated class="filter-card">
                    <h2 class="filter-card__title">{icon("search")}"Find Suppliers"</h2>
                    <div class="filter-card__grid">
                        <Input
                            label="Search"
                            id="search"
                            placeholder="Search suppliers..."
                            value=query
                            on_input=Callback::new(move |v: String| filter.update(|f| f.query = v))
                        />
                        <Select
                            label="Category"
                            id="category"
                            value=Signal::derive(move || filter.with(state::category_value))
                            options=state::category_options()
                            on_change=Callback::new(move |v: String| {
                                filter.update(|f| state::set_category(f, &v))
                            })
                        />
                        <Select
                            label="Budget Range"
                            id="budget"
                            value=Signal::derive(move || filter.with(state::budget_value))
                            options=state::budget_options()
                            on_change=Callback::new(move |v: String| {
                                filter.update(|f| state::set_budget(f, &v))
                            })
                        />
                        <div class="form__group">
                            <span class="form__label">"Filters"</span>
                            <Button
                                variant=Signal::derive(move || {
                                    if filter.with(|f| f.group_buying_only) {
                                        ButtonVariant::Primary
                                    } else {
                                        ButtonVariant::Outline
                                    }
                                })
                                block=true
                                on_click=Callback::new(move |_| {
                                    filter.update(|f| f.group_buying_only = !f.group_buying_only)
                                })
                            >
                                {icon("users")}
                                "Group Buying Only"
                            </Button>
                        </div>
                    </div>
                </CardAnimated>

                <div class="supplier-list">
                    <For
                        each=move || results.get().into_iter().enumerate()
                        key=|(_, s)| s.id
                        children=move |(i, supplier)| {
                            view! {
                                <SupplierCard
                                    supplier=supplier
                                    query=query
                                    delay_ms=(i as u32) * 50
                                    on_details=on_details
                                    on_contact=on_contact
                                />
                            }
                        }
                    />
                </div>

                <Show when=move || results.with(|r| r.is_empty())>
                    <CardAnimated class="empty-state">
                        <div class="empty-state__icon">{icon("search")}</div>
                        <h3 class="empty-state__title">"No suppliers found"</h3>
                        <p class="empty-state__text">
                            "Try adjusting your search criteria or browse all categories"
                        </p>
                    </CardAnimated>
                </Show>
            </div>
        </PageFrame>
    }
}

#[component]
fn SupplierCard(
    supplier: SupplierRecord,
    query: Signal<String>,
    delay_ms: u32,
    on_details: Callback<SupplierId>,
    on_contact: Callback<SupplierId>,
) -> impl IntoView {
    let id = supplier.id;
    let name = supplier.name.clone();
    let description = supplier.description.clone();

    view! {
        <CardAnimated delay_ms=delay_ms class="supplier-card">
            <div class="supplier-card__layout">
                <div class="supplier-card__main">
                    <div class="supplier-card__head">
                        <div>
                            <h3 class="supplier-card__name">
                                {move || highlight_matches(&name, &query.get())}
                            </h3>
                            <div class="supplier-card__location">
                                {icon("map-pin")}
                                {supplier.location.clone()}
                            </div>
                        </div>
                        <Flex vertical=true align=FlexAlign::End gap=FlexGap::Small>
                            {supplier.verified.then(|| view! { <Badge tone=BadgeTone::Success>"Verified"</Badge> })}
                            {supplier.group_buying.then(|| view! {
                                <Badge tone=BadgeTone::Brand>{icon("users")}"Group Buying"</Badge>
                            })}
                        </Flex>
                    </div>

                    <p class="supplier-card__description">
                        {move || highlight_matches(&description, &query.get())}
                    </p>

                    <div class="supplier-card__facts">
                        <div class="supplier-card__fact">
                            <span class="supplier-card__star">{icon("star")}</span>
                            <strong>{supplier.rating_label()}</strong>
                            <span class="text-muted">{format!("({} reviews)", supplier.reviews)}</span>
                        </div>
                        <div class="supplier-card__fact">
                            {icon("dollar")}
                            {format!("Min order: {}", supplier.min_order)}
                        </div>
                        <div class="supplier-card__fact">
                            {icon("truck")}
                            {supplier.delivery.clone()}
                        </div>
                        <div class="supplier-card__fact supplier-card__fact--discount">
                            {supplier.bulk_discount.clone()}
                        </div>
                    </div>
                </div>

                <div class="supplier-card__actions">
                    <Button on_click=Callback::new(move |_| on_details.run(id))>"View Details"</Button>
                    <Button variant=ButtonVariant::Outline on_click=Callback::new(move |_| on_contact.run(id))>
                        "Contact Supplier"
                    </Button>
                </div>
            </div>
        </CardAnimated>
    }
}
