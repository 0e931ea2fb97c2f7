use crate::layout::footer::Footer;
use crate::layout::global_context::use_app_context;
use crate::layout::header::Header;
use crate::routes::view_state::NavAction;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::ui::{Badge, BadgeTone, Button, ButtonSize, ButtonVariant};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LANDING;
use leptos::prelude::*;

struct Feature {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        icon: "dollar",
        title: "Budget Management",
        text: "Set your budget and find suppliers that match your spending limits. Smart filtering keeps you on track.",
    },
    Feature {
        icon: "users",
        title: "Group Buying",
        text: "Join with other vendors to buy in bulk and unlock better prices. More volume, lower costs.",
    },
    Feature {
        icon: "map-pin",
        title: "Local Sourcing",
        text: "Find suppliers near you to reduce delivery costs and support your local business ecosystem.",
    },
    Feature {
        icon: "shield",
        title: "Verified Suppliers",
        text: "All suppliers are verified for quality and reliability. Trade with confidence and peace of mind.",
    },
    Feature {
        icon: "trending-up",
        title: "Price Alerts",
        text: "Get notified when prices drop on items you need. Never miss a good deal again.",
    },
    Feature {
        icon: "cart",
        title: "Easy Ordering",
        text: "Simple, intuitive interface designed for all skill levels. Order what you need in just a few taps.",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let start_as_vendor = Callback::new(move |_| ctx.dispatch(NavAction::StartAsVendor));

    let features = FEATURES
        .iter()
        .enumerate()
        .map(|(i, f)| {
            view! {
                <CardAnimated delay_ms={i as u32 * 60} class="feature-card">
                    <div class="feature-card__icon">{icon(f.icon)}</div>
                    <h3 class="feature-card__title">{f.title}</h3>
                    <p class="feature-card__text">{f.text}</p>
                </CardAnimated>
            }
        })
        .collect_view();

    view! {
        <PageFrame page_id="home--landing" category=PAGE_CAT_LANDING>
            <Header />

            <section class="hero">
                <Badge tone=BadgeTone::Brand class="hero__badge">"Empowering Street Vendors"</Badge>
                <h1 class="hero__title">
                    "Connect with Affordable"
                    <span class="hero__title-accent">"Raw Material Suppliers"</span>
                </h1>
                <p class="hero__lead">
                    "Find verified suppliers, manage your budget, and increase your profits through group buying and smart sourcing."
                </p>
                <div class="hero__actions">
                    <Button size=ButtonSize::Large on_click=start_as_vendor>"Start as Vendor"</Button>
                    <Button size=ButtonSize::Large variant=ButtonVariant::Outline on_click=start_as_vendor>"Browse Suppliers"</Button>
                </div>
            </section>

            <section class="features">
                <h2 class="section-title">"Built for Street Vendors"</h2>
                <div class="features__grid">{features}</div>
            </section>

            <section class="cta">
                <h2 class="section-title">"Ready to Boost Your Business?"</h2>
                <p class="cta__lead">
                    "Join thousands of vendors who are already saving money and increasing profits with VendorConnect."
                </p>
                <Button size=ButtonSize::Large on_click=start_as_vendor>"Get Started Now"</Button>
            </section>

            <Footer />
        </PageFrame>
    }
}
