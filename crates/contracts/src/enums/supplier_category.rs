use super::SelectChoice;
use serde::{Deserialize, Serialize};

/// Product categories a supplier can be listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupplierCategory {
    FoodBeverages,
    ClothingAccessories,
    ElectronicsGadgets,
    HouseholdItems,
    CraftsHandmade,
}

impl SelectChoice for SupplierCategory {
    fn code(&self) -> &'static str {
        match self {
            SupplierCategory::FoodBeverages => "food",
            SupplierCategory::ClothingAccessories => "clothing",
            SupplierCategory::ElectronicsGadgets => "electronics",
            SupplierCategory::HouseholdItems => "household",
            SupplierCategory::CraftsHandmade => "crafts",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            SupplierCategory::FoodBeverages => "Food & Beverages",
            SupplierCategory::ClothingAccessories => "Clothing & Accessories",
            SupplierCategory::ElectronicsGadgets => "Electronics & Gadgets",
            SupplierCategory::HouseholdItems => "Household Items",
            SupplierCategory::CraftsHandmade => "Crafts & Handmade",
        }
    }

    fn all() -> &'static [Self] {
        &[
            SupplierCategory::FoodBeverages,
            SupplierCategory::ClothingAccessories,
            SupplierCategory::ElectronicsGadgets,
            SupplierCategory::HouseholdItems,
            SupplierCategory::CraftsHandmade,
        ]
    }
}

impl std::fmt::Display for SupplierCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip_for_every_category() {
        for category in SupplierCategory::all() {
            assert_eq!(SupplierCategory::from_code(category.code()), Some(*category));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(SupplierCategory::from_code(""), None);
        assert_eq!(SupplierCategory::from_code("Food & Beverages"), None);
    }

    #[test]
    fn test_display_uses_human_name() {
        assert_eq!(
            SupplierCategory::ElectronicsGadgets.to_string(),
            "Electronics & Gadgets"
        );
    }
}
