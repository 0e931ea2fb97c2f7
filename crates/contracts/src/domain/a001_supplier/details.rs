//! Extended supplier profiles shown on the details page.
//!
//! Lookup never fails: an id that has no profile resolves to the first
//! profile of the dataset and the result is flagged with `fallback = true`
//! so the page can say so.

use super::aggregate::{SupplierId, SupplierRecord};
use super::catalog;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierPolicies {
    pub returns: String,
    pub cancellation: String,
    pub warranty: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierDetails {
    #[serde(flatten)]
    pub record: SupplierRecord,
    pub phone: String,
    pub email: String,
    pub address: String,
    #[serde(rename = "businessHours")]
    pub business_hours: String,
    #[serde(rename = "yearEstablished")]
    pub year_established: u16,
    pub specialties: Vec<String>,
    pub certifications: Vec<String>,
    #[serde(rename = "paymentMethods")]
    pub payment_methods: Vec<String>,
    #[serde(rename = "deliveryAreas")]
    pub delivery_areas: Vec<String>,
    pub about: String,
    pub policies: SupplierPolicies,
}

impl SupplierDetails {
    pub fn id(&self) -> SupplierId {
        self.record.id
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }
}

/// Result of [`lookup_details`]
#[derive(Debug, Clone, Copy)]
pub struct DetailsLookup {
    pub requested: SupplierId,
    pub details: &'static SupplierDetails,
    /// `true` when `requested` had no profile and the first one was used
    pub fallback: bool,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn listed(id: u32) -> SupplierRecord {
    catalog::find(SupplierId(id))
        .cloned()
        .unwrap_or_else(|| catalog::catalog()[0].clone())
}

static DETAILS: Lazy<Vec<SupplierDetails>> = Lazy::new(|| {
    vec![
        SupplierDetails {
            record: listed(1),
            phone: "+1 (555) 123-4567".into(),
            email: "orders@freshharvest.com".into(),
            address: "123 Market Street, Downtown District, City 12345".into(),
            business_hours: "Monday - Saturday: 6:00 AM - 6:00 PM".into(),
            year_established: 2015,
            specialties: strings(&[
                "Organic Produce",
                "Seasonal Fruits",
                "Fresh Vegetables",
                "Herbs & Spices",
            ]),
            certifications: strings(&["Organic Certified", "FDA Approved", "Local Health Dept"]),
            payment_methods: strings(&["Cash", "Bank Transfer", "Mobile Payment", "Credit Card"]),
            delivery_areas: strings(&["Downtown", "Central District", "North Side", "South Bay"]),
            about: "Fresh Harvest Distributors has been serving local vendors with the highest \
                    quality produce for over 8 years. We source directly from local farms and \
                    ensure freshness through our cold-chain distribution system."
                .into(),
            policies: SupplierPolicies {
                returns: "24-hour return policy for damaged goods".into(),
                cancellation: "Orders can be cancelled up to 2 hours before delivery".into(),
                warranty: "Quality guarantee on all fresh produce".into(),
            },
        },
        SupplierDetails {
            record: listed(2),
            phone: "+1 (555) 234-5678".into(),
            email: "sales@textilehub.com".into(),
            address: "45 Loom Avenue, Industrial Zone B, City 12360".into(),
            business_hours: "Monday - Friday: 8:00 AM - 5:00 PM".into(),
            year_established: 2011,
            specialties: strings(&["Cotton Fabrics", "Seasonal Apparel", "Trims & Buttons"]),
            certifications: strings(&["OEKO-TEX Standard 100", "Registered Wholesaler"]),
            payment_methods: strings(&["Bank Transfer", "Credit Card", "Net 30 Terms"]),
            delivery_areas: strings(&["Industrial Zone", "Central District", "East End"]),
            about: "Textile Wholesale Hub stocks fabrics and finished clothing for market stalls \
                    and small boutiques, with new seasonal lines every quarter."
                .into(),
            policies: SupplierPolicies {
                returns: "7-day returns on uncut fabric".into(),
                cancellation: "Orders can be cancelled until they are dispatched".into(),
                warranty: "Replacement for manufacturing defects".into(),
            },
        },
        SupplierDetails {
            record: listed(3),
            phone: "+1 (555) 345-6789".into(),
            email: "wholesale@techcomponents.com".into(),
            address: "9 Circuit Road, Tech Park Plaza, City 12371".into(),
            business_hours: "Monday - Saturday: 9:00 AM - 7:00 PM".into(),
            year_established: 2018,
            specialties: strings(&["Phone Accessories", "Chargers & Cables", "Small Gadgets"]),
            certifications: strings(&["CE Marked Products", "Authorized Distributor"]),
            payment_methods: strings(&["Cash", "Bank Transfer", "Mobile Payment"]),
            delivery_areas: strings(&["Tech Park", "Downtown", "North Side"]),
            about: "Tech Components Direct supplies accessories and gadgets to street vendors \
                    and kiosks at wholesale rates, with next day delivery across the city."
                .into(),
            policies: SupplierPolicies {
                returns: "14-day returns on unopened items".into(),
                cancellation: "Orders can be cancelled up to 12 hours before delivery".into(),
                warranty: "6-month warranty on electronics".into(),
            },
        },
        SupplierDetails {
            record: listed(4),
            phone: "+1 (555) 456-7890".into(),
            email: "hello@localcraft.com".into(),
            address: "77 Gallery Lane, Arts Quarter, City 12382".into(),
            business_hours: "Tuesday - Sunday: 10:00 AM - 6:00 PM".into(),
            year_established: 2019,
            specialties: strings(&["Beads & Findings", "Natural Dyes", "Paper Goods", "Yarn"]),
            certifications: strings(&["Fair Trade Partner"]),
            payment_methods: strings(&["Cash", "Mobile Payment", "Credit Card"]),
            delivery_areas: strings(&["Arts Quarter", "Central District"]),
            about: "Local Craft Supplies sources handmade materials from regional makers and \
                    sells them in small lots suited to craft vendors."
                .into(),
            policies: SupplierPolicies {
                returns: "Returns accepted within 5 days".into(),
                cancellation: "Free cancellation before packing".into(),
                warranty: "Replacement for damaged goods on arrival".into(),
            },
        },
        SupplierDetails {
            record: listed(5),
            phone: "+1 (555) 567-8901".into(),
            email: "orders@homeessentials.com".into(),
            address: "210 Commerce Street, Central Shopping District, City 12393".into(),
            business_hours: "Monday - Sunday: 7:00 AM - 9:00 PM".into(),
            year_established: 2013,
            specialties: strings(&["Kitchen Supplies", "Cleaning Products", "Storage"]),
            certifications: strings(&["Registered Wholesaler", "Local Health Dept"]),
            payment_methods: strings(&["Cash", "Bank Transfer", "Credit Card"]),
            delivery_areas: strings(&["Central District", "South Bay", "West End"]),
            about: "Home Essentials Depot carries everyday household and kitchen goods for \
                    vendors who resell in neighbourhood markets."
                .into(),
            policies: SupplierPolicies {
                returns: "30-day returns on unused items".into(),
                cancellation: "Orders can be cancelled up to 1 hour before delivery".into(),
                warranty: "Manufacturer warranty passed through".into(),
            },
        },
    ]
});

/// Every supplier profile, in dataset order
pub fn dataset() -> &'static [SupplierDetails] {
    &DETAILS
}

/// Resolves a supplier profile by id.
///
/// Unknown ids resolve to the first profile with `fallback` set.
pub fn lookup_details(id: SupplierId) -> DetailsLookup {
    lookup_in(&DETAILS, id)
}

fn lookup_in(dataset: &'static [SupplierDetails], id: SupplierId) -> DetailsLookup {
    match dataset.iter().find(|d| d.record.id == id) {
        Some(details) => DetailsLookup {
            requested: id,
            details,
            fallback: false,
        },
        None => DetailsLookup {
            requested: id,
            details: &dataset[0],
            fallback: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_id_resolves_to_its_profile() {
        let lookup = lookup_details(SupplierId(3));
        assert!(!lookup.fallback);
        assert_eq!(lookup.details.name(), "Tech Components Direct");
        assert_eq!(lookup.details.id(), SupplierId(3));
    }

    #[test]
    fn test_unknown_id_falls_back_to_first_profile() {
        let lookup = lookup_details(SupplierId(42));
        assert!(lookup.fallback);
        assert_eq!(lookup.requested, SupplierId(42));
        assert_eq!(lookup.details.id(), dataset()[0].id());
        assert_eq!(lookup.details.name(), "Fresh Harvest Distributors");
    }

    #[test]
    fn test_every_listed_supplier_has_a_profile() {
        for record in catalog::catalog() {
            let lookup = lookup_details(record.id);
            assert!(!lookup.fallback, "no profile for {}", record.name);
            assert_eq!(&lookup.details.record, record);
        }
    }

    #[test]
    fn test_first_profile_contents() {
        let first = &dataset()[0];
        assert_eq!(first.year_established, 2015);
        assert_eq!(first.specialties.len(), 4);
        assert_eq!(first.policies.warranty, "Quality guarantee on all fresh produce");
    }
}
