use contracts::shared::form::{FormField, FormModel};
use contracts::shared::notification::{Notification, NotificationSink};

/// Runs `submit` on `form` and reports the result to `sink`.
///
/// Native `required` attributes normally stop incomplete forms before they
/// get here. If one slips through it is dropped with a warning: no
/// notification, no state change. Returns true when the form was submitted.
pub fn submit_with<M, F>(
    form: &mut M,
    form_name: &str,
    sink: &dyn NotificationSink,
    submit: F,
) -> bool
where
    M: FormModel,
    F: FnOnce(&mut M) -> Notification,
{
    let missing = form.missing_required();
    if !missing.is_empty() {
        let ids: Vec<&str> = missing.iter().map(|f| f.id()).collect();
        log::warn!(
            "{} submit dropped, missing required fields: {}",
            form_name,
            ids.join(", ")
        );
        return false;
    }

    let notification = submit(form);
    log::info!("{} submitted", form_name);
    sink.notify(notification);
    true
}

/// What to run once a registration went through: the completion hook when
/// the parent gave one, otherwise plain back navigation.
pub fn after_registration<C>(on_complete: Option<C>, on_back: C) -> C {
    on_complete.unwrap_or(on_back)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_vendor::{VendorRegistrationField, VendorRegistrationForm};
    use contracts::domain::a004_inquiry::{InquiryField, InquiryForm};
    use contracts::shared::notification::RecordingSink;

    #[test]
    fn test_incomplete_form_is_dropped() {
        let sink = RecordingSink::default();
        let mut form = VendorRegistrationForm::default();
        form.set(VendorRegistrationField::BusinessName, "Chai Stall".into());
        let before = form.clone();

        assert!(!submit_with(&mut form, "vendor registration", &sink, |f| f.submit()));
        assert_eq!(form, before);
        assert!(sink.received.borrow().is_empty());
    }

    #[test]
    fn test_complete_form_notifies_once_and_resets() {
        let sink = RecordingSink::default();
        let mut form = InquiryForm::default();
        form.set(InquiryField::Name, "Ravi Kumar".into());
        form.set(InquiryField::Email, "ravi@example.com".into());
        form.set(InquiryField::Phone, "555-0101".into());
        form.set(InquiryField::InquiryType, "bulk-order".into());
        form.set(InquiryField::Message, "Weekly onions".into());

        assert!(submit_with(&mut form, "inquiry", &sink, |f| {
            f.submit("Fresh Harvest Distributors")
        }));
        assert!(form.is_empty());
        assert_eq!(sink.titles(), ["Message Sent Successfully!"]);
        assert!(sink.received.borrow()[0]
            .description
            .contains("Fresh Harvest Distributors"));
    }

    #[test]
    fn test_after_registration_prefers_completion_hook() {
        assert_eq!(after_registration(Some("registered"), "back"), "registered");
        assert_eq!(after_registration(None, "back"), "back");
    }
}
