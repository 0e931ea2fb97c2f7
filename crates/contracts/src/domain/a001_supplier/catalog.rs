//! Built-in supplier listing used by the directory.

use super::aggregate::{SupplierId, SupplierRecord};
use crate::enums::SupplierCategory;
use once_cell::sync::Lazy;

static CATALOG: Lazy<Vec<SupplierRecord>> = Lazy::new(|| {
    vec![
        SupplierRecord {
            id: SupplierId(1),
            name: "Fresh Harvest Distributors".into(),
            category: SupplierCategory::FoodBeverages,
            location: "Downtown Market District".into(),
            rating: 4.8,
            reviews: 156,
            min_order: "$50".into(),
            bulk_discount: "15% off orders over $500".into(),
            delivery: "Same day delivery".into(),
            description: "Premium quality fruits and vegetables at wholesale prices".into(),
            verified: true,
            group_buying: true,
        },
        SupplierRecord {
            id: SupplierId(2),
            name: "Textile Wholesale Hub".into(),
            category: SupplierCategory::ClothingAccessories,
            location: "Industrial Zone B".into(),
            rating: 4.6,
            reviews: 89,
            min_order: "$100".into(),
            bulk_discount: "20% off orders over $1000".into(),
            delivery: "2-3 business days".into(),
            description: "Wide range of fabrics and clothing materials for all seasons".into(),
            verified: true,
            group_buying: false,
        },
        SupplierRecord {
            id: SupplierId(3),
            name: "Tech Components Direct".into(),
            category: SupplierCategory::ElectronicsGadgets,
            location: "Tech Park Plaza".into(),
            rating: 4.7,
            reviews: 201,
            min_order: "$75".into(),
            bulk_discount: "10% off orders over $300".into(),
            delivery: "Next day delivery".into(),
            description: "Electronics accessories and gadgets at competitive wholesale rates"
                .into(),
            verified: true,
            group_buying: true,
        },
        SupplierRecord {
            id: SupplierId(4),
            name: "Local Craft Supplies".into(),
            category: SupplierCategory::CraftsHandmade,
            location: "Arts Quarter".into(),
            rating: 4.5,
            reviews: 67,
            min_order: "$25".into(),
            bulk_discount: "12% off orders over $200".into(),
            delivery: "3-5 business days".into(),
            description: "Handpicked craft materials and art supplies for creative vendors"
                .into(),
            verified: true,
            group_buying: true,
        },
        SupplierRecord {
            id: SupplierId(5),
            name: "Home Essentials Depot".into(),
            category: SupplierCategory::HouseholdItems,
            location: "Central Shopping District".into(),
            rating: 4.4,
            reviews: 134,
            min_order: "$40".into(),
            bulk_discount: "18% off orders over $400".into(),
            delivery: "Same day delivery".into(),
            description: "Complete range of household items and kitchen supplies".into(),
            verified: true,
            group_buying: false,
        },
    ]
});

/// All listed suppliers in display order
pub fn catalog() -> &'static [SupplierRecord] {
    &CATALOG
}

/// Directory record by id
pub fn find(id: SupplierId) -> Option<&'static SupplierRecord> {
    CATALOG.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<_> = catalog().iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), catalog().len());
        assert_eq!(catalog().len(), 5);
    }

    #[test]
    fn test_ratings_within_range() {
        assert!(catalog().iter().all(|s| (0.0..=5.0).contains(&s.rating)));
    }

    #[test]
    fn test_find() {
        assert_eq!(find(SupplierId(3)).map(|s| s.name.as_str()), Some("Tech Components Direct"));
        assert!(find(SupplierId(99)).is_none());
    }
}
