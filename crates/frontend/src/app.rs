use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::AppConfig;
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Shell state (current view, registered flag) for the whole app
    provide_context(AppGlobalContext::new());

    provide_context(ToastService::new(
        config.toast_limit,
        config.toast_duration_ms,
    ));
    provide_context(config);

    view! {
        <ConfigProvider>
            <AppRoutes />
            <ToastHost />
        </ConfigProvider>
    }
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}
