use crate::shared::form_submit::submit_with;
use crate::shared::toast::ToastService;
use contracts::domain::a002_vendor::{VendorRegistrationField, VendorRegistrationForm};
use contracts::enums::{BudgetRange, SelectChoice, VendorBusinessType};
use contracts::shared::notification::NotificationSink;
use leptos::prelude::*;

use VendorRegistrationField as F;

/// Form sections in display order: title, icon, fields
pub const SECTIONS: [(&str, &str, &[VendorRegistrationField]); 3] = [
    (
        "Business Information",
        "store",
        &[F::BusinessName, F::OwnerName, F::BusinessType, F::Description],
    ),
    ("Contact & Location", "map-pin", &[F::Phone, F::Email, F::Location]),
    ("Budget Information", "dollar", &[F::MonthlyBudget]),
];

pub fn field_options(field: VendorRegistrationField) -> Vec<(String, String)> {
    match field {
        F::BusinessType => VendorBusinessType::options(),
        F::MonthlyBudget => BudgetRange::to_options(&BudgetRange::FORMS),
        _ => Vec::new(),
    }
}

pub fn register_vendor(form: &mut VendorRegistrationForm, sink: &dyn NotificationSink) -> bool {
    submit_with(form, "vendor registration", sink, |f| f.submit())
}

#[derive(Clone, Copy)]
pub struct VendorRegistrationVm {
    pub form: RwSignal<VendorRegistrationForm>,
    toasts: ToastService,
}

impl VendorRegistrationVm {
    pub fn new(toasts: ToastService) -> Self {
        Self {
            form: RwSignal::new(VendorRegistrationForm::default()),
            toasts,
        }
    }

    /// Submits the form; `on_complete` runs only after a successful submit.
    pub fn submit_command(&self, on_complete: Callback<()>) {
        let mut form = self.form.get_untracked();
        if register_vendor(&mut form, &self.toasts) {
            self.form.set(form);
            on_complete.run(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::form::{FormField, FormModel};
    use contracts::shared::notification::RecordingSink;

    #[test]
    fn test_sections_list_every_field() {
        let count: usize = SECTIONS.iter().map(|(_, _, fields)| fields.len()).sum();
        assert_eq!(count, F::all().len());
        for field in F::all() {
            assert!(SECTIONS.iter().any(|(_, _, fields)| fields.contains(field)));
        }
    }

    #[test]
    fn test_selects_have_options() {
        assert_eq!(field_options(F::BusinessType).len(), 6);
        assert_eq!(field_options(F::MonthlyBudget)[0].1, "Under $100");
        assert!(field_options(F::Phone).is_empty());
    }

    #[test]
    fn test_register_vendor() {
        let sink = RecordingSink::default();
        let mut form = VendorRegistrationForm::default();
        form.set(F::BusinessName, "Chai Stall".into());
        form.set(F::OwnerName, "Meera".into());
        form.set(F::BusinessType, "food".into());
        form.set(F::Phone, "555-0100".into());
        form.set(F::Location, "Central Market".into());
        assert!(!register_vendor(&mut form, &sink));

        form.set(F::MonthlyBudget, "500-1000".into());
        assert!(register_vendor(&mut form, &sink));
        assert!(form.is_empty());
        assert_eq!(sink.titles(), ["Registration Successful!"]);
    }
}
