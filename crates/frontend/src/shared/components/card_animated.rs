use leptos::prelude::*;
use thaw::Card;

const APPEAR_MS: u32 = 280;

/// Inline style for the `card-appear` keyframes, started after `delay_ms`.
pub fn appear_style(delay_ms: u32) -> String {
    format!("animation: card-appear {APPEAR_MS}ms ease-out {delay_ms}ms both;")
}

/// A thaw `Card` that fades in on mount. Cards laid out side by side get
/// growing `delay_ms` values so they appear one after another.
#[component]
pub fn CardAnimated(
    #[prop(optional)]
    delay_ms: u32,
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <Card class=class attr:style=appear_style(delay_ms)>
            {children()}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appear_style_carries_delay() {
        assert_eq!(appear_style(0), "animation: card-appear 280ms ease-out 0ms both;");
        assert!(appear_style(150).contains("ease-out 150ms"));
    }
}
