use crate::shared::icons::icon;
use contracts::dashboards::d400_vendor_dashboard::format_dollars;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTone {
    Neutral,
    Good,
    Bad,
}

impl StatTone {
    /// Tone for an amount that should stay non-negative
    pub fn for_balance(amount: i64) -> Self {
        if amount < 0 {
            StatTone::Bad
        } else {
            StatTone::Good
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            StatTone::Good => "stat-card stat-card--success",
            StatTone::Bad => "stat-card stat-card--error",
            StatTone::Neutral => "stat-card",
        }
    }
}

/// Card with an icon, a label and a whole-dollar amount
#[component]
pub fn StatCard(
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    #[prop(into)]
    amount: Signal<i64>,
    #[prop(into, optional)]
    tone: Option<Signal<StatTone>>,
    #[prop(into, optional)]
    subtitle: Option<String>,
) -> impl IntoView {
    let status_class = move || tone.map(|t| t.get()).unwrap_or(StatTone::Neutral).css_class();

    view! {
        <div class=status_class>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || format_dollars(amount.get())}</div>
                {subtitle.map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}
