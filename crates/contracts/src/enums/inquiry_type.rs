use super::SelectChoice;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InquiryType {
    PriceQuote,
    ProductInfo,
    BulkOrder,
    GroupBuying,
    Partnership,
    Other,
}

impl SelectChoice for InquiryType {
    fn code(&self) -> &'static str {
        match self {
            InquiryType::PriceQuote => "price-quote",
            InquiryType::ProductInfo => "product-info",
            InquiryType::BulkOrder => "bulk-order",
            InquiryType::GroupBuying => "group-buying",
            InquiryType::Partnership => "partnership",
            InquiryType::Other => "other",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            InquiryType::PriceQuote => "Price Quote",
            InquiryType::ProductInfo => "Product Information",
            InquiryType::BulkOrder => "Bulk Order",
            InquiryType::GroupBuying => "Group Buying",
            InquiryType::Partnership => "Partnership Opportunity",
            InquiryType::Other => "Other",
        }
    }

    fn all() -> &'static [Self] {
        &[
            InquiryType::PriceQuote,
            InquiryType::ProductInfo,
            InquiryType::BulkOrder,
            InquiryType::GroupBuying,
            InquiryType::Partnership,
            InquiryType::Other,
        ]
    }
}
