use crate::shared::form::{FormField, FormModel, InputKind};
use crate::shared::notification::Notification;
use crate::shared::validation::ValidationRules;
use serde::{Deserialize, Serialize};

/// Inquiry a vendor sends to one supplier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryForm {
    pub name: String,
    pub business_name: String,
    pub email: String,
    pub phone: String,
    /// [`crate::enums::InquiryType`] code
    pub inquiry_type: String,
    /// [`crate::enums::BudgetRange`] code
    pub budget: String,
    pub quantity: String,
    /// `YYYY-MM-DD` from the date input, may be empty
    pub delivery_date: String,
    pub product_details: String,
    pub message: String,
}

impl InquiryForm {
    pub fn success_notification(supplier_name: &str) -> Notification {
        Notification::new(
            "Message Sent Successfully!",
            format!(
                "Your inquiry has been sent to {}. They will contact you within 24 hours.",
                supplier_name
            ),
        )
    }

    /// Clears the form and returns the confirmation naming the supplier
    pub fn submit(&mut self, supplier_name: &str) -> Notification {
        self.reset();
        Self::success_notification(supplier_name)
    }

    /// Parsed delivery date, `None` when empty or not a date
    pub fn required_by(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::parse_from_str(self.delivery_date.trim(), "%Y-%m-%d").ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryField {
    Name,
    BusinessName,
    Email,
    Phone,
    InquiryType,
    Budget,
    Quantity,
    DeliveryDate,
    ProductDetails,
    Message,
}

impl FormField for InquiryField {
    fn all() -> &'static [Self] {
        &[
            InquiryField::Name,
            InquiryField::BusinessName,
            InquiryField::Email,
            InquiryField::Phone,
            InquiryField::InquiryType,
            InquiryField::Budget,
            InquiryField::Quantity,
            InquiryField::DeliveryDate,
            InquiryField::ProductDetails,
            InquiryField::Message,
        ]
    }

    fn id(&self) -> &'static str {
        match self {
            InquiryField::Name => "name",
            InquiryField::BusinessName => "businessName",
            InquiryField::Email => "email",
            InquiryField::Phone => "phone",
            InquiryField::InquiryType => "inquiryType",
            InquiryField::Budget => "budget",
            InquiryField::Quantity => "quantity",
            InquiryField::DeliveryDate => "deliveryDate",
            InquiryField::ProductDetails => "productDetails",
            InquiryField::Message => "message",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            InquiryField::Name => "Full Name",
            InquiryField::BusinessName => "Business Name",
            InquiryField::Email => "Email Address",
            InquiryField::Phone => "Phone Number",
            InquiryField::InquiryType => "Inquiry Type",
            InquiryField::Budget => "Budget Range",
            InquiryField::Quantity => "Estimated Quantity",
            InquiryField::DeliveryDate => "Required by Date",
            InquiryField::ProductDetails => "Product Details",
            InquiryField::Message => "Additional Message",
        }
    }

    fn rules(&self) -> ValidationRules {
        match self {
            InquiryField::Name
            | InquiryField::Email
            | InquiryField::Phone
            | InquiryField::InquiryType
            | InquiryField::Message => ValidationRules::required(),
            _ => ValidationRules::none(),
        }
    }

    fn kind(&self) -> InputKind {
        match self {
            InquiryField::Email => InputKind::Email,
            InquiryField::Phone => InputKind::Tel,
            InquiryField::DeliveryDate => InputKind::Date,
            InquiryField::InquiryType | InquiryField::Budget => InputKind::Select,
            InquiryField::Message => InputKind::TextArea,
            _ => InputKind::Text,
        }
    }

    fn placeholder(&self) -> &'static str {
        match self {
            InquiryField::Name => "Your full name",
            InquiryField::BusinessName => "Your business name",
            InquiryField::Email => "your@email.com",
            InquiryField::Phone => "+1 (555) 123-4567",
            InquiryField::InquiryType => "Select inquiry type",
            InquiryField::Budget => "Select budget range",
            InquiryField::Quantity => "e.g., 100 units, 50 kg, etc.",
            InquiryField::DeliveryDate => "",
            InquiryField::ProductDetails => "Specific products or materials you need",
            InquiryField::Message => {
                "Please provide more details about your requirements, any specific questions, or additional information..."
            }
        }
    }
}

impl FormModel for InquiryForm {
    type Field = InquiryField;

    fn get(&self, field: Self::Field) -> &str {
        match field {
            InquiryField::Name => &self.name,
            InquiryField::BusinessName => &self.business_name,
            InquiryField::Email => &self.email,
            InquiryField::Phone => &self.phone,
            InquiryField::InquiryType => &self.inquiry_type,
            InquiryField::Budget => &self.budget,
            InquiryField::Quantity => &self.quantity,
            InquiryField::DeliveryDate => &self.delivery_date,
            InquiryField::ProductDetails => &self.product_details,
            InquiryField::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: Self::Field) -> &mut String {
        match field {
            InquiryField::Name => &mut self.name,
            InquiryField::BusinessName => &mut self.business_name,
            InquiryField::Email => &mut self.email,
            InquiryField::Phone => &mut self.phone,
            InquiryField::InquiryType => &mut self.inquiry_type,
            InquiryField::Budget => &mut self.budget,
            InquiryField::Quantity => &mut self.quantity,
            InquiryField::DeliveryDate => &mut self.delivery_date,
            InquiryField::ProductDetails => &mut self.product_details,
            InquiryField::Message => &mut self.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_names_supplier() {
        let mut form = InquiryForm {
            name: "Ravi".into(),
            message: "Need 50kg of onions weekly".into(),
            ..InquiryForm::default()
        };
        let notification = form.submit("Fresh Harvest Distributors");
        assert_eq!(notification.title, "Message Sent Successfully!");
        assert_eq!(
            notification.description,
            "Your inquiry has been sent to Fresh Harvest Distributors. They will contact you within 24 hours."
        );
        assert!(form.is_empty());
    }

    #[test]
    fn test_required_by_parses_date_input() {
        let mut form = InquiryForm::default();
        assert_eq!(form.required_by(), None);
        form.set(InquiryField::DeliveryDate, "2025-03-15".into());
        assert_eq!(
            form.required_by(),
            chrono::NaiveDate::from_ymd_opt(2025, 3, 15)
        );
        form.set(InquiryField::DeliveryDate, "next week".into());
        assert_eq!(form.required_by(), None);
    }

    #[test]
    fn test_html_types() {
        assert_eq!(InquiryField::Phone.kind().html_type(), "tel");
        assert_eq!(InquiryField::DeliveryDate.kind().html_type(), "date");
        assert_eq!(InquiryField::Quantity.kind().html_type(), "text");
    }
}
