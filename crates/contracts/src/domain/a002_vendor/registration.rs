use crate::shared::form::{FormField, FormModel, InputKind};
use crate::shared::notification::Notification;
use crate::shared::validation::ValidationRules;
use serde::{Deserialize, Serialize};

/// Vendor sign-up form. Cleared on submit, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorRegistrationForm {
    pub business_name: String,
    pub owner_name: String,
    /// [`crate::enums::VendorBusinessType`] code
    pub business_type: String,
    pub description: String,
    pub phone: String,
    pub email: String,
    pub location: String,
    /// [`crate::enums::BudgetRange`] code
    pub monthly_budget: String,
}

impl VendorRegistrationForm {
    pub fn success_notification() -> Notification {
        Notification::new(
            "Registration Successful!",
            "Welcome to VendorConnect. You can now browse suppliers and start saving money.",
        )
    }

    /// Clears the form and returns the confirmation to show
    pub fn submit(&mut self) -> Notification {
        self.reset();
        Self::success_notification()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorRegistrationField {
    BusinessName,
    OwnerName,
    BusinessType,
    Description,
    Phone,
    Email,
    Location,
    MonthlyBudget,
}

impl FormField for VendorRegistrationField {
    fn all() -> &'static [Self] {
        &[
            VendorRegistrationField::BusinessName,
            VendorRegistrationField::OwnerName,
            VendorRegistrationField::BusinessType,
            VendorRegistrationField::Description,
            VendorRegistrationField::Phone,
            VendorRegistrationField::Email,
            VendorRegistrationField::Location,
            VendorRegistrationField::MonthlyBudget,
        ]
    }

    fn id(&self) -> &'static str {
        match self {
            VendorRegistrationField::BusinessName => "businessName",
            VendorRegistrationField::OwnerName => "ownerName",
            VendorRegistrationField::BusinessType => "businessType",
            VendorRegistrationField::Description => "description",
            VendorRegistrationField::Phone => "phone",
            VendorRegistrationField::Email => "email",
            VendorRegistrationField::Location => "location",
            VendorRegistrationField::MonthlyBudget => "monthlyBudget",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            VendorRegistrationField::BusinessName => "Business Name",
            VendorRegistrationField::OwnerName => "Owner Name",
            VendorRegistrationField::BusinessType => "Business Type",
            VendorRegistrationField::Description => "Business Description",
            VendorRegistrationField::Phone => "Phone Number",
            VendorRegistrationField::Email => "Email Address",
            VendorRegistrationField::Location => "Business Location",
            VendorRegistrationField::MonthlyBudget => "Monthly Raw Material Budget",
        }
    }

    fn rules(&self) -> ValidationRules {
        match self {
            VendorRegistrationField::Description | VendorRegistrationField::Email => {
                ValidationRules::none()
            }
            _ => ValidationRules::required(),
        }
    }

    fn kind(&self) -> InputKind {
        match self {
            VendorRegistrationField::BusinessType | VendorRegistrationField::MonthlyBudget => {
                InputKind::Select
            }
            VendorRegistrationField::Description => InputKind::TextArea,
            VendorRegistrationField::Phone => InputKind::Tel,
            VendorRegistrationField::Email => InputKind::Email,
            _ => InputKind::Text,
        }
    }

    fn placeholder(&self) -> &'static str {
        match self {
            VendorRegistrationField::BusinessName => "e.g., Fresh Fruit Corner",
            VendorRegistrationField::OwnerName => "Your full name",
            VendorRegistrationField::BusinessType => "Select your business type",
            VendorRegistrationField::Description => "Tell us about your business and what you sell",
            VendorRegistrationField::Phone => "+1 (555) 123-4567",
            VendorRegistrationField::Email => "your@email.com",
            VendorRegistrationField::Location => "City, District, or Market area",
            VendorRegistrationField::MonthlyBudget => "Select your typical monthly budget",
        }
    }
}

impl FormModel for VendorRegistrationForm {
    type Field = VendorRegistrationField;

    fn get(&self, field: Self::Field) -> &str {
        match field {
            VendorRegistrationField::BusinessName => &self.business_name,
            VendorRegistrationField::OwnerName => &self.owner_name,
            VendorRegistrationField::BusinessType => &self.business_type,
            VendorRegistrationField::Description => &self.description,
            VendorRegistrationField::Phone => &self.phone,
            VendorRegistrationField::Email => &self.email,
            VendorRegistrationField::Location => &self.location,
            VendorRegistrationField::MonthlyBudget => &self.monthly_budget,
        }
    }

    fn field_mut(&mut self, field: Self::Field) -> &mut String {
        match field {
            VendorRegistrationField::BusinessName => &mut self.business_name,
            VendorRegistrationField::OwnerName => &mut self.owner_name,
            VendorRegistrationField::BusinessType => &mut self.business_type,
            VendorRegistrationField::Description => &mut self.description,
            VendorRegistrationField::Phone => &mut self.phone,
            VendorRegistrationField::Email => &mut self.email,
            VendorRegistrationField::Location => &mut self.location,
            VendorRegistrationField::MonthlyBudget => &mut self.monthly_budget,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> VendorRegistrationForm {
        VendorRegistrationForm {
            business_name: "Fresh Fruit Corner".into(),
            owner_name: "Asha Patel".into(),
            business_type: "food".into(),
            description: String::new(),
            phone: "+1 (555) 222-3333".into(),
            email: String::new(),
            location: "Central Market".into(),
            monthly_budget: "100-500".into(),
        }
    }

    #[test]
    fn test_new_form_is_empty() {
        let form = VendorRegistrationForm::default();
        assert!(form.is_empty());
        assert_eq!(form.missing_required().len(), 6);
    }

    #[test]
    fn test_required_markers() {
        let required: Vec<&str> = VendorRegistrationField::all()
            .iter()
            .filter(|f| f.is_required())
            .map(|f| f.id())
            .collect();
        assert_eq!(
            required,
            ["businessName", "ownerName", "businessType", "phone", "location", "monthlyBudget"]
        );
        assert_eq!(VendorRegistrationField::Phone.display_label(), "Phone Number *");
        assert_eq!(VendorRegistrationField::Email.display_label(), "Email Address");
    }

    #[test]
    fn test_set_updates_only_that_field() {
        let mut form = filled();
        let before = form.clone();
        form.set(VendorRegistrationField::Location, "Harbour Road".into());
        assert_eq!(form.location, "Harbour Road");
        form.set(VendorRegistrationField::Location, before.location.clone());
        assert_eq!(form, before);
    }

    #[test]
    fn test_missing_required_ignores_optional_fields() {
        let form = filled();
        assert!(form.missing_required().is_empty());
        assert!(form.validate().is_ok());

        let mut blank_phone = filled();
        blank_phone.set(VendorRegistrationField::Phone, "  ".into());
        assert_eq!(
            blank_phone.missing_required(),
            [VendorRegistrationField::Phone]
        );
        assert_eq!(
            blank_phone.validate(),
            Err("Phone Number is required".to_string())
        );
    }

    #[test]
    fn test_submit_resets_and_confirms() {
        let mut form = filled();
        let notification = form.submit();
        assert!(form.is_empty());
        assert_eq!(notification.title, "Registration Successful!");
        assert_eq!(
            notification.description,
            "Welcome to VendorConnect. You can now browse suppliers and start saving money."
        );
    }
}
