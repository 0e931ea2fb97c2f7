use crate::shared::form::{FormField, FormModel, InputKind};
use crate::shared::notification::Notification;
use crate::shared::validation::ValidationRules;
use serde::{Deserialize, Serialize};

/// Vendor profile shown and edited on the dashboard.
///
/// Lives only as long as the dashboard is mounted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorProfile {
    #[serde(rename = "businessName")]
    pub business_name: String,
    #[serde(rename = "ownerName")]
    pub owner_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(rename = "businessType")]
    pub business_type: String,
}

impl VendorProfile {
    /// Profile the dashboard starts with
    pub fn sample() -> Self {
        Self {
            business_name: "Street Food Express".into(),
            owner_name: "John Doe".into(),
            email: "john@streetfood.com".into(),
            phone: "+1 (555) 123-4567".into(),
            address: "123 Market Street, City".into(),
            business_type: "Food Vendor".into(),
        }
    }

    /// First word of the owner name, used in the greeting
    pub fn first_name(&self) -> &str {
        self.owner_name.split_whitespace().next().unwrap_or("")
    }

    /// Up to two upper-cased initials of the owner name
    pub fn initials(&self) -> String {
        self.owner_name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn greeting(&self) -> String {
        match self.first_name() {
            "" => "Welcome back".to_string(),
            name => format!("Welcome back, {}", name),
        }
    }

    pub fn updated_notification() -> Notification {
        Notification::new(
            "Profile Updated",
            "Your profile information has been successfully updated.",
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorProfileField {
    BusinessName,
    OwnerName,
    Email,
    Phone,
    Address,
    BusinessType,
}

impl FormField for VendorProfileField {
    fn all() -> &'static [Self] {
        &[
            VendorProfileField::BusinessName,
            VendorProfileField::OwnerName,
            VendorProfileField::Email,
            VendorProfileField::Phone,
            VendorProfileField::Address,
            VendorProfileField::BusinessType,
        ]
    }

    fn id(&self) -> &'static str {
        match self {
            VendorProfileField::BusinessName => "businessName",
            VendorProfileField::OwnerName => "ownerName",
            VendorProfileField::Email => "email",
            VendorProfileField::Phone => "phone",
            VendorProfileField::Address => "address",
            VendorProfileField::BusinessType => "businessType",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            VendorProfileField::BusinessName => "Business Name",
            VendorProfileField::OwnerName => "Owner Name",
            VendorProfileField::Email => "Email",
            VendorProfileField::Phone => "Phone",
            VendorProfileField::Address => "Business Address",
            VendorProfileField::BusinessType => "Business Type",
        }
    }

    fn rules(&self) -> ValidationRules {
        ValidationRules::none()
    }

    fn kind(&self) -> InputKind {
        match self {
            VendorProfileField::Email => InputKind::Email,
            VendorProfileField::Address => InputKind::TextArea,
            _ => InputKind::Text,
        }
    }
}

impl FormModel for VendorProfile {
    type Field = VendorProfileField;

    fn get(&self, field: Self::Field) -> &str {
        match field {
            VendorProfileField::BusinessName => &self.business_name,
            VendorProfileField::OwnerName => &self.owner_name,
            VendorProfileField::Email => &self.email,
            VendorProfileField::Phone => &self.phone,
            VendorProfileField::Address => &self.address,
            VendorProfileField::BusinessType => &self.business_type,
        }
    }

    fn field_mut(&mut self, field: Self::Field) -> &mut String {
        match field {
            VendorProfileField::BusinessName => &mut self.business_name,
            VendorProfileField::OwnerName => &mut self.owner_name,
            VendorProfileField::Email => &mut self.email,
            VendorProfileField::Phone => &mut self.phone,
            VendorProfileField::Address => &mut self.address,
            VendorProfileField::BusinessType => &mut self.business_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_greeting_and_initials() {
        let profile = VendorProfile::sample();
        assert_eq!(profile.greeting(), "Welcome back, John");
        assert_eq!(profile.initials(), "JD");
    }

    #[test]
    fn test_initials_edge_cases() {
        let mut profile = VendorProfile::default();
        assert_eq!(profile.initials(), "");
        assert_eq!(profile.greeting(), "Welcome back");

        profile.owner_name = "  maria  de la cruz ".into();
        assert_eq!(profile.initials(), "MD");
        assert_eq!(profile.first_name(), "maria");
    }

    #[test]
    fn test_set_changes_one_field() {
        let mut profile = VendorProfile::sample();
        profile.set(VendorProfileField::Phone, "+1 (555) 000-0000".into());
        assert_eq!(profile.phone, "+1 (555) 000-0000");
        assert_eq!(
            VendorProfile {
                phone: VendorProfile::sample().phone,
                ..profile
            },
            VendorProfile::sample()
        );
    }
}
