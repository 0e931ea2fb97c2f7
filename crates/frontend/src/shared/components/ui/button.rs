use leptos::ev::MouseEvent;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// BEM class list for a button
pub fn button_class(variant: ButtonVariant, size: ButtonSize, block: bool) -> String {
    let mut classes = vec!["button"];
    classes.push(match variant {
        ButtonVariant::Primary => "button--primary",
        ButtonVariant::Outline => "button--outline",
    });
    match size {
        ButtonSize::Small => classes.push("button--small"),
        ButtonSize::Large => classes.push("button--large"),
        ButtonSize::Medium => {}
    }
    if block {
        classes.push("button--block");
    }
    classes.join(" ")
}

#[component]
pub fn Button(
    /// Reactive so that toggle buttons can switch look
    #[prop(optional, into)]
    variant: MaybeProp<ButtonVariant>,
    #[prop(optional)]
    size: ButtonSize,
    /// Full width
    #[prop(optional)]
    block: bool,
    /// `type="submit"` instead of `type="button"`
    #[prop(optional)]
    submit: bool,
    #[prop(optional)]
    on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = move || button_class(variant.get().unwrap_or_default(), size, block);

    view! {
        <button
            type=if submit { "submit" } else { "button" }
            class=class
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_class() {
        assert_eq!(
            button_class(ButtonVariant::default(), ButtonSize::default(), false),
            "button button--primary"
        );
        assert_eq!(
            button_class(ButtonVariant::Outline, ButtonSize::Large, true),
            "button button--outline button--large button--block"
        );
    }
}
