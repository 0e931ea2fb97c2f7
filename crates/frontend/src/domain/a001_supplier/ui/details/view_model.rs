use contracts::domain::a001_supplier::{lookup_details, DetailsLookup, SupplierDetails, SupplierId};

/// Read-only view model of the supplier details page
#[derive(Debug, Clone, Copy)]
pub struct SupplierDetailsVm {
    lookup: DetailsLookup,
}

impl SupplierDetailsVm {
    pub fn load(id: SupplierId) -> Self {
        let lookup = lookup_details(id);
        if lookup.fallback {
            log::warn!(
                "no profile for supplier {}, showing {}",
                id.value(),
                lookup.details.name()
            );
        } else {
            log::debug!("supplier details {}", lookup.details.name());
        }
        Self { lookup }
    }

    pub fn details(&self) -> &'static SupplierDetails {
        self.lookup.details
    }

    /// Id of the profile actually on screen (differs from the requested
    /// one after a fallback). "Send Message" contacts this supplier.
    pub fn shown_id(&self) -> SupplierId {
        self.lookup.details.id()
    }

    pub fn fallback_message(&self) -> Option<String> {
        fallback_message(&self.lookup)
    }
}

pub fn fallback_message(lookup: &DetailsLookup) -> Option<String> {
    lookup.fallback.then(|| {
        format!(
            "Detailed information for supplier #{} is not available. Showing {} instead.",
            lookup.requested.value(),
            lookup.details.name()
        )
    })
}

pub fn since_label(year: u16) -> String {
    format!("Since {}", year)
}

/// Rows of the "Key Information" card
pub fn key_information(details: &SupplierDetails) -> Vec<(&'static str, String)> {
    vec![
        ("Minimum Order", details.record.min_order.clone()),
        ("Delivery", details.record.delivery.clone()),
        ("Business Hours", details.business_hours.clone()),
        ("Bulk Discount", details.record.bulk_discount.clone()),
    ]
}

/// Rows of the "Policies & Terms" card
pub fn policy_rows(details: &SupplierDetails) -> Vec<(&'static str, String)> {
    let p = &details.policies;
    vec![
        ("Returns", p.returns.clone()),
        ("Cancellation", p.cancellation.clone()),
        ("Quality Guarantee", p.warranty.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_supplier_has_no_warning() {
        let vm = SupplierDetailsVm::load(SupplierId(2));
        assert_eq!(vm.fallback_message(), None);
        assert_eq!(vm.shown_id(), SupplierId(2));
    }

    #[test]
    fn test_fallback_is_announced() {
        let vm = SupplierDetailsVm::load(SupplierId(99));
        assert_eq!(vm.shown_id(), SupplierId(1));
        let message = vm.fallback_message().unwrap();
        assert!(message.contains("#99"));
        assert!(message.contains("Fresh Harvest Distributors"));
    }

    #[test]
    fn test_key_information_and_policies() {
        let details = SupplierDetailsVm::load(SupplierId(1)).details();
        let keys: Vec<_> = key_information(details).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["Minimum Order", "Delivery", "Business Hours", "Bulk Discount"]);
        assert_eq!(
            key_information(details)[2].1,
            "Monday - Saturday: 6:00 AM - 6:00 PM"
        );

        let policies = policy_rows(details);
        assert_eq!(policies[2], ("Quality Guarantee", "Quality guarantee on all fresh produce".to_string()));
        assert_eq!(since_label(details.year_established), "Since 2015");
    }
}
