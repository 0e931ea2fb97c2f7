use crate::enums::SupplierCategory;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Stable supplier identifier, the only lookup key for supplier data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SupplierId(pub u32);

impl SupplierId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SupplierId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Record
// ============================================================================

/// Supplier as listed in the directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierRecord {
    pub id: SupplierId,
    pub name: String,
    pub category: SupplierCategory,
    pub location: String,
    /// 0.0 ..= 5.0
    pub rating: f32,
    pub reviews: u32,
    /// Formatted amount, e.g. `"$50"`
    #[serde(rename = "minOrder")]
    pub min_order: String,
    #[serde(rename = "bulkDiscount")]
    pub bulk_discount: String,
    pub delivery: String,
    pub description: String,
    pub verified: bool,
    #[serde(rename = "groupBuying")]
    pub group_buying: bool,
}

impl SupplierRecord {
    /// Minimum order in whole dollars, if `min_order` holds a number
    pub fn min_order_amount(&self) -> Option<u32> {
        parse_dollars(&self.min_order)
    }

    /// Rating formatted with one decimal, e.g. `"4.8"`
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }
}

/// Parses `"$1,250"`, `"1250"` or `"$75.00"` into whole dollars
pub fn parse_dollars(raw: &str) -> Option<u32> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    let whole = cleaned.split('.').next()?;
    if whole.is_empty() {
        return None;
    }
    whole.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dollars() {
        assert_eq!(parse_dollars("$50"), Some(50));
        assert_eq!(parse_dollars(" $1,250 "), Some(1250));
        assert_eq!(parse_dollars("75.99"), Some(75));
        assert_eq!(parse_dollars("call us"), None);
        assert_eq!(parse_dollars("$"), None);
        assert_eq!(parse_dollars(""), None);
    }

    #[test]
    fn test_rating_label() {
        let mut record = crate::domain::a001_supplier::catalog()[0].clone();
        record.rating = 4.0;
        assert_eq!(record.rating_label(), "4.0");
    }
}
