use crate::shared::form::{FormField, FormModel, InputKind};
use crate::shared::notification::Notification;
use crate::shared::validation::ValidationRules;
use serde::{Deserialize, Serialize};

/// Supplier sign-up form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierRegistrationForm {
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// [`crate::enums::SupplierBusinessType`] code
    pub business_type: String,
    /// [`crate::enums::ExperienceRange`] code
    pub experience: String,
    pub products_services: String,
    pub certifications: String,
    pub minimum_order_value: String,
    /// [`crate::enums::PaymentTerms`] code
    pub payment_terms: String,
    pub delivery_areas: String,
}

impl SupplierRegistrationForm {
    pub fn success_notification() -> Notification {
        Notification::new(
            "Registration Successful!",
            "Welcome to VendorConnect as a Supplier. You can now connect with vendors and grow your business.",
        )
    }

    pub fn submit(&mut self) -> Notification {
        self.reset();
        Self::success_notification()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplierRegistrationField {
    CompanyName,
    ContactPerson,
    Email,
    Phone,
    Address,
    BusinessType,
    Experience,
    ProductsServices,
    Certifications,
    MinimumOrderValue,
    PaymentTerms,
    DeliveryAreas,
}

impl FormField for SupplierRegistrationField {
    fn all() -> &'static [Self] {
        use SupplierRegistrationField::*;
        &[
            CompanyName,
            ContactPerson,
            Email,
            Phone,
            Address,
            BusinessType,
            Experience,
            ProductsServices,
            Certifications,
            MinimumOrderValue,
            PaymentTerms,
            DeliveryAreas,
        ]
    }

    fn id(&self) -> &'static str {
        use SupplierRegistrationField::*;
        match self {
            CompanyName => "companyName",
            ContactPerson => "contactPerson",
            Email => "email",
            Phone => "phone",
            Address => "address",
            BusinessType => "businessType",
            Experience => "experience",
            ProductsServices => "productsServices",
            Certifications => "certifications",
            MinimumOrderValue => "minimumOrderValue",
            PaymentTerms => "paymentTerms",
            DeliveryAreas => "deliveryAreas",
        }
    }

    fn label(&self) -> &'static str {
        use SupplierRegistrationField::*;
        match self {
            CompanyName => "Company Name",
            ContactPerson => "Contact Person",
            Email => "Email Address",
            Phone => "Phone Number",
            Address => "Business Address",
            BusinessType => "Business Type",
            Experience => "Years of Experience",
            ProductsServices => "Products/Services Offered",
            Certifications => "Certifications & Licenses",
            MinimumOrderValue => "Minimum Order Value",
            PaymentTerms => "Payment Terms",
            DeliveryAreas => "Delivery Areas Covered",
        }
    }

    fn rules(&self) -> ValidationRules {
        use SupplierRegistrationField::*;
        match self {
            Certifications | MinimumOrderValue | PaymentTerms | DeliveryAreas => {
                ValidationRules::none()
            }
            _ => ValidationRules::required(),
        }
    }

    fn kind(&self) -> InputKind {
        use SupplierRegistrationField::*;
        match self {
            Email => InputKind::Email,
            Address | ProductsServices | Certifications | DeliveryAreas => InputKind::TextArea,
            BusinessType | Experience | PaymentTerms => InputKind::Select,
            _ => InputKind::Text,
        }
    }

    fn placeholder(&self) -> &'static str {
        use SupplierRegistrationField::*;
        match self {
            CompanyName => "Enter your company name",
            ContactPerson => "Your full name",
            Email => "your@email.com",
            Phone => "+1 (555) 123-4567",
            Address => "Enter your complete business address",
            BusinessType => "Select business type",
            Experience => "Select experience",
            ProductsServices => "Describe the products or services you offer",
            Certifications => "List any relevant certifications, licenses, or quality standards",
            MinimumOrderValue => "e.g., $500",
            PaymentTerms => "Select payment terms",
            DeliveryAreas => "List cities, states, or regions you can deliver to",
        }
    }
}

impl FormModel for SupplierRegistrationForm {
    type Field = SupplierRegistrationField;

    fn get(&self, field: Self::Field) -> &str {
        use SupplierRegistrationField::*;
        match field {
            CompanyName => &self.company_name,
            ContactPerson => &self.contact_person,
            Email => &self.email,
            Phone => &self.phone,
            Address => &self.address,
            BusinessType => &self.business_type,
            Experience => &self.experience,
            ProductsServices => &self.products_services,
            Certifications => &self.certifications,
            MinimumOrderValue => &self.minimum_order_value,
            PaymentTerms => &self.payment_terms,
            DeliveryAreas => &self.delivery_areas,
        }
    }

    fn field_mut(&mut self, field: Self::Field) -> &mut String {
        use SupplierRegistrationField::*;
        match field {
            CompanyName => &mut self.company_name,
            ContactPerson => &mut self.contact_person,
            Email => &mut self.email,
            Phone => &mut self.phone,
            Address => &mut self.address,
            BusinessType => &mut self.business_type,
            Experience => &mut self.experience,
            ProductsServices => &mut self.products_services,
            Certifications => &mut self.certifications,
            MinimumOrderValue => &mut self.minimum_order_value,
            PaymentTerms => &mut self.payment_terms,
            DeliveryAreas => &mut self.delivery_areas,
        }
    }
}
