use crate::shared::icons::icon;
use leptos::prelude::*;

/// Title row of an inner page. `on_back` adds a "Back" button in front of
/// the title; children are placed on the right as actions.
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    #[prop(optional)]
    on_back: Option<Callback<()>>,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let back = on_back.map(|cb| {
        view! {
            <button type="button" class="button button--ghost page-header__back" on:click=move |_| cb.run(())>
                {icon("arrow-left")}
                "Back"
            </button>
        }
    });

    view! {
        <div class="page-header">
            <div class="page-header__content">
                {back}
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|text| view! { <p class="page-header__subtitle">{text}</p> })}
                </div>
            </div>
            {children.map(|actions| view! { <div class="page-header__actions">{actions()}</div> })}
        </div>
    }
}
