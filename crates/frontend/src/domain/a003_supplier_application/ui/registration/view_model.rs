use crate::shared::form_submit::submit_with;
use crate::shared::toast::ToastService;
use contracts::domain::a003_supplier_application::{
    SupplierRegistrationField, SupplierRegistrationForm,
};
use contracts::enums::{ExperienceRange, PaymentTerms, SelectChoice, SupplierBusinessType};
use contracts::shared::notification::NotificationSink;
use leptos::prelude::*;

pub fn field_options(field: SupplierRegistrationField) -> Vec<(String, String)> {
    match field {
        SupplierRegistrationField::BusinessType => SupplierBusinessType::options(),
        SupplierRegistrationField::Experience => ExperienceRange::options(),
        SupplierRegistrationField::PaymentTerms => PaymentTerms::options(),
        _ => Vec::new(),
    }
}

pub fn register_supplier(form: &mut SupplierRegistrationForm, sink: &dyn NotificationSink) -> bool {
    submit_with(form, "supplier registration", sink, |f| f.submit())
}

#[derive(Clone, Copy)]
pub struct SupplierRegistrationVm {
    pub form: RwSignal<SupplierRegistrationForm>,
    toasts: ToastService,
}

impl SupplierRegistrationVm {
    pub fn new(toasts: ToastService) -> Self {
        Self {
            form: RwSignal::new(SupplierRegistrationForm::default()),
            toasts,
        }
    }

    pub fn submit_command(&self, on_complete: Callback<()>) {
        let mut form = self.form.get_untracked();
        if register_supplier(&mut form, &self.toasts) {
            self.form.set(form);
            on_complete.run(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::form::FormModel;
    use contracts::shared::notification::RecordingSink;
    use SupplierRegistrationField as F;

    #[test]
    fn test_select_options() {
        assert_eq!(field_options(F::BusinessType).len(), 5);
        assert_eq!(field_options(F::Experience)[3], ("10+".into(), "10+ years".into()));
        assert_eq!(field_options(F::PaymentTerms)[0].1, "Cash on Delivery");
        assert!(field_options(F::DeliveryAreas).is_empty());
    }

    #[test]
    fn test_optional_fields_may_stay_blank() {
        let sink = RecordingSink::default();
        let mut form = SupplierRegistrationForm::default();
        form.set(F::CompanyName, "Spice Route Traders".into());
        form.set(F::ContactPerson, "Imran".into());
        form.set(F::Email, "imran@spiceroute.com".into());
        form.set(F::Phone, "555-0177".into());
        form.set(F::Address, "8 Dock Road".into());
        form.set(F::BusinessType, "trader".into());
        form.set(F::Experience, "6-10".into());
        form.set(F::ProductsServices, "Whole and ground spices".into());

        assert!(register_supplier(&mut form, &sink));
        assert!(form.is_empty());
        let sent = sink.received.borrow();
        assert_eq!(
            sent[0].description,
            "Welcome to VendorConnect as a Supplier. You can now connect with vendors and grow your business."
        );
    }

    #[test]
    fn test_incomplete_application_is_not_sent() {
        let sink = RecordingSink::default();
        let mut form = SupplierRegistrationForm::default();
        form.set(F::CompanyName, "Spice Route Traders".into());
        assert!(!register_supplier(&mut form, &sink));
        assert!(!form.is_empty());
        assert!(sink.titles().is_empty());
    }
}
