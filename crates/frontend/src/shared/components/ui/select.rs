use super::field_group::FieldGroup;
use leptos::prelude::*;

/// Select over `(value, text)` pairs.
///
/// With a `placeholder` an empty disabled first option is added, so a
/// `required` select blocks submission until a real choice is made.
/// Options track `value` through the `selected` property, which keeps them
/// in sync after the user has touched the control.
#[component]
pub fn Select(
    #[prop(into)]
    id: String,
    #[prop(optional, into)]
    label: Option<String>,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    options: Vec<(String, String)>,
    #[prop(optional)]
    placeholder: &'static str,
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let group_id = id.clone();
    let placeholder_option = (!placeholder.is_empty()).then(|| {
        view! {
            <option value="" disabled=true prop:selected=move || value.get().is_empty()>
                {placeholder}
            </option>
        }
    });
    let choices = options
        .into_iter()
        .map(|(code, text)| {
            let current = code.clone();
            view! {
                <option value=code prop:selected=move || value.get() == current>
                    {text}
                </option>
            }
        })
        .collect_view();

    view! {
        <FieldGroup id=group_id label=label>
            <select
                id=id
                class="form__select"
                required=required
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {placeholder_option}
                {choices}
            </select>
        </FieldGroup>
    }
}
