use crate::shared::form_submit::submit_with;
use crate::shared::toast::ToastService;
use contracts::domain::a001_supplier::{lookup_details, SupplierDetails, SupplierId};
use contracts::domain::a004_inquiry::{InquiryField, InquiryForm};
use contracts::enums::{BudgetRange, InquiryType, SelectChoice};
use contracts::shared::notification::NotificationSink;
use leptos::prelude::*;

pub const CONTACT_DETAILS_FIELDS: [InquiryField; 4] = [
    InquiryField::Name,
    InquiryField::BusinessName,
    InquiryField::Email,
    InquiryField::Phone,
];

pub const INQUIRY_DETAILS_FIELDS: [InquiryField; 6] = [
    InquiryField::InquiryType,
    InquiryField::Budget,
    InquiryField::Quantity,
    InquiryField::DeliveryDate,
    InquiryField::ProductDetails,
    InquiryField::Message,
];

pub const QUOTE_TIPS: [&str; 3] = [
    "Provide specific quantities for accurate pricing",
    "Mention if you're interested in group buying",
    "Be clear about product specifications",
];

/// Select options for `field`, empty for free-text fields
pub fn field_options(field: InquiryField) -> Vec<(String, String)> {
    match field {
        InquiryField::InquiryType => InquiryType::options(),
        InquiryField::Budget => BudgetRange::to_options(&BudgetRange::FORMS),
        _ => Vec::new(),
    }
}

/// Sends the inquiry to `sink`. The form is cleared on success and the
/// page stays where it is.
pub fn send_inquiry(form: &mut InquiryForm, supplier_name: &str, sink: &dyn NotificationSink) -> bool {
    submit_with(form, "inquiry", sink, |f| f.submit(supplier_name))
}

#[derive(Clone, Copy)]
pub struct ContactSupplierVm {
    pub form: RwSignal<InquiryForm>,
    supplier: &'static SupplierDetails,
    toasts: ToastService,
}

impl ContactSupplierVm {
    pub fn new(id: SupplierId, toasts: ToastService) -> Self {
        let lookup = lookup_details(id);
        if lookup.fallback {
            log::warn!(
                "contact form for unknown supplier {}, addressing {}",
                id.value(),
                lookup.details.name()
            );
        }
        Self {
            form: RwSignal::new(InquiryForm::default()),
            supplier: lookup.details,
            toasts,
        }
    }

    pub fn supplier(&self) -> &'static SupplierDetails {
        self.supplier
    }

    pub fn submit_command(&self) {
        let mut form = self.form.get_untracked();
        if send_inquiry(&mut form, self.supplier.name(), &self.toasts) {
            self.form.set(form);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::form::{FormField, FormModel};
    use contracts::shared::notification::RecordingSink;

    #[test]
    fn test_sections_cover_every_field_once() {
        let mut all: Vec<_> = CONTACT_DETAILS_FIELDS
            .iter()
            .chain(INQUIRY_DETAILS_FIELDS.iter())
            .copied()
            .collect();
        assert_eq!(all.len(), InquiryField::all().len());
        all.dedup();
        assert_eq!(all, InquiryField::all());
    }

    #[test]
    fn test_select_fields_have_options() {
        assert_eq!(field_options(InquiryField::InquiryType).len(), 6);
        assert_eq!(field_options(InquiryField::Budget).len(), 6);
        assert!(field_options(InquiryField::Message).is_empty());
    }

    #[test]
    fn test_send_inquiry_names_the_supplier() {
        let sink = RecordingSink::default();
        let mut form = InquiryForm::default();
        form.set(InquiryField::Name, "Asha".into());
        form.set(InquiryField::Email, "asha@example.com".into());
        form.set(InquiryField::Phone, "555-0199".into());
        form.set(InquiryField::InquiryType, "price-quote".into());
        form.set(InquiryField::Message, "Price for 20kg rice?".into());

        assert!(send_inquiry(&mut form, "Textile Wholesale Hub", &sink));
        assert!(form.is_empty());
        let sent = sink.received.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0].description,
            "Your inquiry has been sent to Textile Wholesale Hub. They will contact you within 24 hours."
        );
    }

    #[test]
    fn test_send_inquiry_without_message_is_dropped() {
        let sink = RecordingSink::default();
        let mut form = InquiryForm::default();
        form.set(InquiryField::Name, "Asha".into());

        assert!(!send_inquiry(&mut form, "Textile Wholesale Hub", &sink));
        assert_eq!(form.get(InquiryField::Name), "Asha");
        assert!(sink.titles().is_empty());
    }
}
