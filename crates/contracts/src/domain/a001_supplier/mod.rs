pub mod aggregate;
pub mod catalog;
pub mod details;
pub mod filter;

pub use aggregate::{SupplierId, SupplierRecord};
pub use catalog::catalog;
pub use details::{lookup_details, DetailsLookup, SupplierDetails, SupplierPolicies};
pub use filter::{FilterResult, SupplierFilter};
