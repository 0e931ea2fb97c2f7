//! Page category constants.
//!
//! Every page declares an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"a001_supplier--list"`) and a `data-page-category` from the list
//! below. The entity part matches the module directory, so an id copied from
//! the DOM inspector leads straight to the code.

/// Searchable list of records
pub const PAGE_CAT_LIST: &str = "list";

/// Read-only view of a single record
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Data entry page (registration, inquiry)
pub const PAGE_CAT_FORM: &str = "form";

pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Marketing / landing page, free-form layout
pub const PAGE_CAT_LANDING: &str = "landing";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_FORM,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_LANDING,
];

/// Validate that a page id matches the `{entity}--{category}` format
/// with a known category.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && is_known_category(category),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_supplier--list"));
        assert!(is_valid_page_id("d400_vendor_dashboard--dashboard"));
        assert!(!is_valid_page_id("a001_supplier"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_supplier--table"));
    }
}
