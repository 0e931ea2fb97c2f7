use crate::app::use_config;
use chrono::Datelike;
use leptos::prelude::*;

fn copyright_line(year: i32, brand: &str) -> String {
    format!(
        "© {} {}. Empowering street vendors worldwide.",
        year, brand
    )
}

#[component]
pub fn Footer() -> impl IntoView {
    let brand = use_config().brand_name;
    let year = chrono::Local::now().year();

    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__brand">{brand.clone()}</div>
            <p class="footer__text">{copyright_line(year, &brand)}</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line(2025, "VendorConnect"),
            "© 2025 VendorConnect. Empowering street vendors worldwide."
        );
    }
}
