use leptos::prelude::*;

/// Label + control wrapper shared by the text, select and textarea fields
#[component]
pub fn FieldGroup(id: String, label: Option<String>, children: Children) -> impl IntoView {
    view! {
        <div class="form__group">
            {label.map(|text| view! { <label class="form__label" for=id>{text}</label> })}
            {children()}
        </div>
    }
}
