pub mod budget_range;
pub mod business_type;
pub mod inquiry_type;
pub mod supplier_category;
pub mod supplier_terms;

pub use budget_range::BudgetRange;
pub use business_type::{SupplierBusinessType, VendorBusinessType};
pub use inquiry_type::InquiryType;
pub use supplier_category::SupplierCategory;
pub use supplier_terms::{ExperienceRange, PaymentTerms};

/// Closed set of values offered by a `<select>`.
///
/// `code` is the value stored in forms, `display_name` is what the user sees.
pub trait SelectChoice: Copy + Sized + 'static {
    fn code(&self) -> &'static str;

    fn display_name(&self) -> &'static str;

    fn all() -> &'static [Self];

    fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.code() == code)
    }

    /// `(code, display_name)` pairs in declaration order
    fn options() -> Vec<(String, String)> {
        Self::all()
            .iter()
            .map(|c| (c.code().to_string(), c.display_name().to_string()))
            .collect()
    }
}
