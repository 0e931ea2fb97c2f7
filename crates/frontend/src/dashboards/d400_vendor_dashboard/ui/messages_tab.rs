use super::view_model::VendorDashboardVm;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::ui::{Badge, BadgeTone, Button, ButtonSize, Input};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn MessagesTab(vm: VendorDashboardVm) -> impl IntoView {
    let now = vm.opened_at;

    view! {
        <CardAnimated class="details-card">
            <h3 class="details-card__title">{icon("message")}"Messages from Suppliers"</h3>
            <div class="message-list">
                {vm.messages.with_value(|messages| {
                    messages
                        .iter()
                        .map(|m| {
                            let id = m.id;
                            view! {
                                <div class="message">
                                    <div class="message__head">
                                        <strong>{m.supplier.clone()}</strong>
                                        {m.unread.then(|| view! { <Badge tone=BadgeTone::Brand>"New"</Badge> })}
                                        <span class="message__time text-muted">
                                            {icon("clock")}
                                            {m.received_label(now)}
                                        </span>
                                    </div>
                                    <p class="message__text">{m.message.clone()}</p>
                                    <div class="message__reply">
                                        <Input
                                            id=format!("reply-{}", id)
                                            placeholder="Type your reply..."
                                            value=Signal::derive(move || vm.draft(id))
                                            on_input=Callback::new(move |v: String| vm.set_draft(id, v))
                                        />
                                        <Button
                                            size=ButtonSize::Small
                                            on_click=Callback::new(move |_| vm.send_reply_command(id))
                                        >
                                            {icon("send")}
                                        </Button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                })}
            </div>
        </CardAnimated>
    }
}
