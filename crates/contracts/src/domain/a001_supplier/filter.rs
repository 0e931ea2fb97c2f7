//! Directory search.
//!
//! A record is kept when every criterion accepts it. The result keeps the
//! catalog order.

use super::aggregate::SupplierRecord;
use crate::enums::{BudgetRange, SupplierCategory};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierFilter {
    /// Case-insensitive substring of name or description; empty matches all
    pub query: String,
    pub category: Option<SupplierCategory>,
    pub group_buying_only: bool,
    /// Keep suppliers whose minimum order fits under the range's upper bound
    pub budget: Option<BudgetRange>,
}

impl SupplierFilter {
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_category(category: SupplierCategory) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    pub fn group_buying() -> Self {
        Self {
            group_buying_only: true,
            ..Self::default()
        }
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
            || self.category.is_some()
            || self.group_buying_only
            || self.budget.is_some()
    }

    pub fn matches(&self, supplier: &SupplierRecord) -> bool {
        self.matches_query(supplier)
            && self.matches_category(supplier)
            && self.matches_group_buying(supplier)
            && self.matches_budget(supplier)
    }

    /// Ordered subsequence of `catalog` accepted by this filter
    pub fn apply<'a>(&self, catalog: &'a [SupplierRecord]) -> FilterResult<'a> {
        FilterResult {
            suppliers: catalog.iter().filter(|s| self.matches(s)).collect(),
        }
    }

    fn matches_query(&self, supplier: &SupplierRecord) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        supplier.name.to_lowercase().contains(&needle)
            || supplier.description.to_lowercase().contains(&needle)
    }

    fn matches_category(&self, supplier: &SupplierRecord) -> bool {
        self.category.map_or(true, |c| c == supplier.category)
    }

    fn matches_group_buying(&self, supplier: &SupplierRecord) -> bool {
        !self.group_buying_only || supplier.group_buying
    }

    fn matches_budget(&self, supplier: &SupplierRecord) -> bool {
        let Some(bound) = self.budget.and_then(|b| b.upper_bound()) else {
            return true;
        };
        supplier.min_order_amount().map_or(true, |amount| amount <= bound)
    }
}

/// Suppliers accepted by a [`SupplierFilter`]
#[derive(Debug, Clone, PartialEq)]
pub struct FilterResult<'a> {
    pub suppliers: Vec<&'a SupplierRecord>,
}

impl<'a> FilterResult<'a> {
    pub fn is_empty(&self) -> bool {
        self.suppliers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.suppliers.len()
    }

    pub fn names(&self) -> Vec<&'a str> {
        self.suppliers.iter().map(|s| s.name.as_str()).collect()
    }

    /// Owned copies for handing to reactive state
    pub fn to_owned_records(&self) -> Vec<SupplierRecord> {
        self.suppliers.iter().map(|s| (*s).clone()).collect()
    }

    /// "1 supplier found" / "3 suppliers found"
    pub fn summary(&self) -> String {
        match self.len() {
            1 => "1 supplier found".to_string(),
            n => format!("{} suppliers found", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_supplier::catalog::catalog;
    use crate::domain::a001_supplier::SupplierId;
    use crate::enums::SelectChoice;

    fn is_subsequence(sub: &[&SupplierRecord], of: &[SupplierRecord]) -> bool {
        let mut rest = of.iter();
        sub.iter().all(|s| rest.any(|o| o.id == s.id))
    }

    fn expensive_supplier() -> SupplierRecord {
        SupplierRecord {
            id: SupplierId(90),
            name: "Bulk Grain Traders".into(),
            min_order: "$750".into(),
            ..catalog()[0].clone()
        }
    }

    #[test]
    fn test_default_filter_returns_whole_catalog_in_order() {
        let result = SupplierFilter::default().apply(catalog());
        assert_eq!(result.len(), catalog().len());
        assert!(is_subsequence(&result.suppliers, catalog()));
        assert!(!SupplierFilter::default().is_active());
    }

    #[test]
    fn test_query_matches_name_or_description_case_insensitively() {
        for query in ["fresh", "FRESH", "wholesale", "Supplies", "a", "kitchen"] {
            let result = SupplierFilter::with_query(query).apply(catalog());
            let needle = query.to_lowercase();
            let expected: Vec<&str> = catalog()
                .iter()
                .filter(|s| {
                    s.name.to_lowercase().contains(&needle)
                        || s.description.to_lowercase().contains(&needle)
                })
                .map(|s| s.name.as_str())
                .collect();
            assert_eq!(result.names(), expected, "query {:?}", query);
            assert!(is_subsequence(&result.suppliers, catalog()));
        }
    }

    #[test]
    fn test_query_searches_description() {
        let result = SupplierFilter::with_query("kitchen").apply(catalog());
        assert_eq!(result.names(), ["Home Essentials Depot"]);
    }

    #[test]
    fn test_category_filter_is_exact_subset() {
        let all = SupplierFilter::default().apply(catalog());
        for category in SupplierCategory::all() {
            let result = SupplierFilter::with_category(*category).apply(catalog());
            assert!(result.suppliers.iter().all(|s| s.category == *category));
            assert!(result.suppliers.iter().all(|s| all.suppliers.contains(s)));
        }
    }

    #[test]
    fn test_group_buying_filter() {
        let result = SupplierFilter::group_buying().apply(catalog());
        assert!(result.suppliers.iter().all(|s| s.group_buying));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let filter = SupplierFilter {
            query: "e".into(),
            group_buying_only: true,
            ..SupplierFilter::default()
        };
        let once = filter.apply(catalog());
        let twice = filter.apply(catalog());
        assert_eq!(once, twice);

        let narrowed: Vec<SupplierRecord> = once.to_owned_records();
        assert_eq!(filter.apply(&narrowed).names(), once.names());
    }

    #[test]
    fn test_query_fresh_matches_one_supplier() {
        let result = SupplierFilter::with_query("Fresh").apply(catalog());
        assert_eq!(result.names(), ["Fresh Harvest Distributors"]);
    }

    #[test]
    fn test_electronics_category_matches_one_supplier() {
        let result =
            SupplierFilter::with_category(SupplierCategory::ElectronicsGadgets).apply(catalog());
        assert_eq!(result.names(), ["Tech Components Direct"]);
    }

    #[test]
    fn test_group_buying_keeps_catalog_order() {
        let result = SupplierFilter::group_buying().apply(catalog());
        assert_eq!(
            result.names(),
            [
                "Fresh Harvest Distributors",
                "Tech Components Direct",
                "Local Craft Supplies"
            ]
        );
    }

    #[test]
    fn test_unmatched_query_is_empty() {
        let result = SupplierFilter::with_query("zzz-no-match").apply(catalog());
        assert!(result.is_empty());
        assert_eq!(result.summary(), "0 suppliers found");
    }

    #[test]
    fn test_combined_criteria() {
        let filter = SupplierFilter {
            query: "direct".into(),
            category: Some(SupplierCategory::FoodBeverages),
            ..SupplierFilter::default()
        };
        assert!(filter.apply(catalog()).is_empty());
    }

    #[test]
    fn test_budget_bound_uses_min_order() {
        let mut suppliers = catalog().to_vec();
        suppliers.push(expensive_supplier());

        let under_100 = SupplierFilter {
            budget: Some(BudgetRange::Under100),
            ..SupplierFilter::default()
        };
        let result = under_100.apply(&suppliers);
        assert_eq!(result.len(), catalog().len());
        assert!(!result.names().contains(&"Bulk Grain Traders"));

        let open_ended = SupplierFilter {
            budget: Some(BudgetRange::Over1000),
            ..SupplierFilter::default()
        };
        assert_eq!(open_ended.apply(&suppliers).len(), suppliers.len());
    }

    #[test]
    fn test_budget_keeps_unparsable_min_order() {
        let mut odd = expensive_supplier();
        odd.min_order = "on request".into();
        let filter = SupplierFilter {
            budget: Some(BudgetRange::Under100),
            ..SupplierFilter::default()
        };
        assert!(filter.matches(&odd));
    }

    #[test]
    fn test_summary_wording() {
        let result = SupplierFilter::with_query("Fresh").apply(catalog());
        assert_eq!(result.summary(), "1 supplier found");
    }
}
