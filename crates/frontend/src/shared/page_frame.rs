//! Root element of every screen.
//!
//! The element gets `id="{entity}--{category}"` (for example
//! `a001_supplier--list`) and `data-page-category`, so styles and
//! browser tests can find a page without relying on its markup.

use super::page_standard::*;
use leptos::prelude::*;

/// CSS classes for a page of the given category
pub fn page_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_LIST => "page page--list",
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_FORM => "page page--form",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_LANDING => "page page--landing",
        _ => "page",
    }
}

#[component]
pub fn PageFrame(
    page_id: &'static str,
    /// One of the `PAGE_CAT_*` constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) {
        log::warn!("page id '{}' does not follow entity--category", page_id);
    }

    view! {
        <div id=page_id class=page_class(category) data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_class() {
        assert_eq!(page_class(PAGE_CAT_FORM), "page page--form");
        assert_eq!(page_class(PAGE_CAT_LIST), "page page--list");
        assert_eq!(page_class("table"), "page");
    }
}
