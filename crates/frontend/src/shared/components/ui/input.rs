use super::field_group::FieldGroup;
use contracts::shared::form::InputKind;
use leptos::prelude::*;

/// Single-line input. `value` is bound as a DOM property so that clearing
/// the backing signal clears the field.
#[component]
pub fn Input(
    #[prop(into)]
    id: String,
    #[prop(optional, into)]
    label: Option<String>,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    /// Text when not given
    #[prop(optional)]
    kind: Option<InputKind>,
    #[prop(optional)]
    placeholder: &'static str,
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let input_type = kind.unwrap_or(InputKind::Text).html_type();
    let group_id = id.clone();

    view! {
        <FieldGroup id=group_id label=label>
            <input
                id=id
                class="form__input"
                type=input_type
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </FieldGroup>
    }
}
