use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeTone {
    #[default]
    Neutral,
    /// Brand color: "Group Buying", "New"
    Brand,
    /// "Verified"
    Success,
}

impl BadgeTone {
    fn css_class(self) -> &'static str {
        match self {
            BadgeTone::Neutral => "badge badge--neutral",
            BadgeTone::Brand => "badge badge--primary",
            BadgeTone::Success => "badge badge--success",
        }
    }
}

#[component]
pub fn Badge(
    #[prop(optional)]
    tone: BadgeTone,
    /// Extra class for placement
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        tone.css_class().to_string()
    } else {
        format!("{} {}", tone.css_class(), class)
    };

    view! { <span class=full_class>{children()}</span> }
}
