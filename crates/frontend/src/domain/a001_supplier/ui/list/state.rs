use contracts::domain::a001_supplier::SupplierFilter;
use contracts::enums::{BudgetRange, SelectChoice, SupplierCategory};

/// Select value meaning "no restriction"
pub const ANY: &str = "";

pub fn category_options() -> Vec<(String, String)> {
    let mut options = vec![(ANY.to_string(), "All categories".to_string())];
    options.extend(SupplierCategory::options());
    options
}

pub fn budget_options() -> Vec<(String, String)> {
    let mut options = vec![(ANY.to_string(), "Any budget".to_string())];
    options.extend(BudgetRange::to_options(&BudgetRange::DIRECTORY));
    options
}

/// Select value for the current category criterion
pub fn category_value(filter: &SupplierFilter) -> String {
    filter
        .category
        .map(|c| c.code().to_string())
        .unwrap_or_default()
}

pub fn budget_value(filter: &SupplierFilter) -> String {
    filter
        .budget
        .map(|b| b.code().to_string())
        .unwrap_or_default()
}

/// Applies a category select change. Unknown values clear the criterion.
pub fn set_category(filter: &mut SupplierFilter, value: &str) {
    filter.category = SupplierCategory::from_code(value);
}

pub fn set_budget(filter: &mut SupplierFilter, value: &str) {
    filter.budget = BudgetRange::from_code(value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_option_comes_first() {
        assert_eq!(category_options()[0], (String::new(), "All categories".into()));
        assert_eq!(category_options().len(), 6);
        assert_eq!(budget_options()[0].1, "Any budget");
        assert_eq!(budget_options().len(), 5);
    }

    #[test]
    fn test_select_round_trip() {
        let mut filter = SupplierFilter::default();
        set_category(&mut filter, "crafts");
        set_budget(&mut filter, "under-100");
        assert_eq!(filter.category, Some(SupplierCategory::CraftsHandmade));
        assert_eq!(category_value(&filter), "crafts");
        assert_eq!(budget_value(&filter), "under-100");

        set_category(&mut filter, ANY);
        set_budget(&mut filter, ANY);
        assert_eq!(filter, SupplierFilter::default());
    }
}
