use super::field_group::FieldGroup;
use leptos::prelude::*;

#[component]
pub fn Textarea(
    #[prop(into)]
    id: String,
    #[prop(optional, into)]
    label: Option<String>,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)]
    placeholder: &'static str,
    #[prop(optional)]
    required: bool,
    #[prop(default = 4)]
    rows: u32,
) -> impl IntoView {
    let group_id = id.clone();

    view! {
        <FieldGroup id=group_id label=label>
            <textarea
                id=id
                class="form__textarea"
                placeholder=placeholder
                required=required
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </FieldGroup>
    }
}
