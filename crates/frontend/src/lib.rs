pub mod app;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use shared::config::load_config_or_default;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let (config, fallback_reason) = load_config_or_default();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level());
    console_error_panic_hook::set_once();

    if let Some(reason) = fallback_reason {
        log::warn!("using default configuration: {}", reason);
    }
    log::debug!("configuration: {:?}", config);

    leptos::mount::mount_to_body(move || view_app(config));
}

fn view_app(config: shared::config::AppConfig) -> impl leptos::prelude::IntoView {
    leptos::prelude::view! { <app::App config=config /> }
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
