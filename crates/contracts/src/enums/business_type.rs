use super::SelectChoice;
use serde::{Deserialize, Serialize};

/// What a vendor sells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VendorBusinessType {
    Food,
    Clothing,
    Electronics,
    Household,
    Crafts,
    Other,
}

impl SelectChoice for VendorBusinessType {
    fn code(&self) -> &'static str {
        match self {
            VendorBusinessType::Food => "food",
            VendorBusinessType::Clothing => "clothing",
            VendorBusinessType::Electronics => "electronics",
            VendorBusinessType::Household => "household",
            VendorBusinessType::Crafts => "crafts",
            VendorBusinessType::Other => "other",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            VendorBusinessType::Food => "Food & Beverages",
            VendorBusinessType::Clothing => "Clothing & Accessories",
            VendorBusinessType::Electronics => "Electronics & Gadgets",
            VendorBusinessType::Household => "Household Items",
            VendorBusinessType::Crafts => "Crafts & Handmade",
            VendorBusinessType::Other => "Other",
        }
    }

    fn all() -> &'static [Self] {
        &[
            VendorBusinessType::Food,
            VendorBusinessType::Clothing,
            VendorBusinessType::Electronics,
            VendorBusinessType::Household,
            VendorBusinessType::Crafts,
            VendorBusinessType::Other,
        ]
    }
}

/// How a supplier operates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupplierBusinessType {
    Manufacturer,
    Distributor,
    Wholesaler,
    Trader,
    ServiceProvider,
}

impl SelectChoice for SupplierBusinessType {
    fn code(&self) -> &'static str {
        match self {
            SupplierBusinessType::Manufacturer => "manufacturer",
            SupplierBusinessType::Distributor => "distributor",
            SupplierBusinessType::Wholesaler => "wholesaler",
            SupplierBusinessType::Trader => "trader",
            SupplierBusinessType::ServiceProvider => "service-provider",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            SupplierBusinessType::Manufacturer => "Manufacturer",
            SupplierBusinessType::Distributor => "Distributor",
            SupplierBusinessType::Wholesaler => "Wholesaler",
            SupplierBusinessType::Trader => "Trader",
            SupplierBusinessType::ServiceProvider => "Service Provider",
        }
    }

    fn all() -> &'static [Self] {
        &[
            SupplierBusinessType::Manufacturer,
            SupplierBusinessType::Distributor,
            SupplierBusinessType::Wholesaler,
            SupplierBusinessType::Trader,
            SupplierBusinessType::ServiceProvider,
        ]
    }
}
