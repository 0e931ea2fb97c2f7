use super::contact::ContactSupplier;
use super::details::SupplierDetailsPage;
use super::list::SupplierList;
use contracts::domain::a001_supplier::{SupplierFilter, SupplierId};
use leptos::prelude::*;

/// Page shown inside the supplier directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectoryView {
    #[default]
    List,
    Details(SupplierId),
    Contact(SupplierId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryAction {
    ViewDetails(SupplierId),
    ContactSupplier(SupplierId),
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryOutcome {
    Show(DirectoryView),
    /// Back from the list leaves the directory
    Leave,
}

impl DirectoryView {
    pub fn apply(self, action: DirectoryAction) -> DirectoryOutcome {
        use DirectoryAction::*;
        use DirectoryView::*;

        let next = match (self, action) {
            (List, ViewDetails(id)) => Details(id),
            (List, ContactSupplier(id)) | (Details(_), ContactSupplier(id)) => Contact(id),
            (List, Back) => return DirectoryOutcome::Leave,
            (Details(_), Back) => List,
            (Contact(id), Back) => Details(id),
            (current, _) => current,
        };
        DirectoryOutcome::Show(next)
    }
}

/// Supplier directory with its own list/details/contact navigation.
///
/// The filter lives here, so it survives a trip to details and back.
#[component]
pub fn SupplierDirectory(on_back: Callback<()>) -> impl IntoView {
    let page = RwSignal::new(DirectoryView::List);
    let filter = RwSignal::new(SupplierFilter::default());

    let navigate = Callback::new(move |action: DirectoryAction| {
        let current = page.get_untracked();
        match current.apply(action) {
            DirectoryOutcome::Show(next) if next != current => {
                log::debug!("directory {:?} -> {:?}", current, next);
                page.set(next);
            }
            DirectoryOutcome::Show(_) => {
                log::debug!("directory ignored {:?} in {:?}", action, current);
            }
            DirectoryOutcome::Leave => on_back.run(()),
        }
    });
    let go = move |action: DirectoryAction| navigate.run(action);

    move || match page.get() {
        DirectoryView::List => view! {
            <SupplierList
                filter=filter
                on_details=Callback::new(move |id| go(DirectoryAction::ViewDetails(id)))
                on_contact=Callback::new(move |id| go(DirectoryAction::ContactSupplier(id)))
                on_back=Callback::new(move |_| go(DirectoryAction::Back))
            />
        }
        .into_any(),
        DirectoryView::Details(id) => view! {
            <SupplierDetailsPage
                id=id
                on_contact=Callback::new(move |id| go(DirectoryAction::ContactSupplier(id)))
                on_back=Callback::new(move |_| go(DirectoryAction::Back))
            />
        }
        .into_any(),
        DirectoryView::Contact(id) => view! {
            <ContactSupplier
                id=id
                on_back=Callback::new(move |_| go(DirectoryAction::Back))
            />
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: SupplierId = SupplierId(1);
    const THREE: SupplierId = SupplierId(3);

    #[test]
    fn test_list_to_details_and_back() {
        let v = DirectoryView::List;
        assert_eq!(
            v.apply(DirectoryAction::ViewDetails(THREE)),
            DirectoryOutcome::Show(DirectoryView::Details(THREE))
        );
        assert_eq!(
            DirectoryView::Details(THREE).apply(DirectoryAction::Back),
            DirectoryOutcome::Show(DirectoryView::List)
        );
    }

    #[test]
    fn test_contact_back_goes_to_details_of_same_supplier() {
        let v = DirectoryView::Details(ONE);
        let DirectoryOutcome::Show(contact) = v.apply(DirectoryAction::ContactSupplier(ONE)) else {
            panic!("expected to stay in directory");
        };
        assert_eq!(contact, DirectoryView::Contact(ONE));
        assert_eq!(
            contact.apply(DirectoryAction::Back),
            DirectoryOutcome::Show(DirectoryView::Details(ONE))
        );
    }

    #[test]
    fn test_contact_straight_from_list() {
        assert_eq!(
            DirectoryView::List.apply(DirectoryAction::ContactSupplier(THREE)),
            DirectoryOutcome::Show(DirectoryView::Contact(THREE))
        );
        // Back still goes through the details page
        assert_eq!(
            DirectoryView::Contact(THREE).apply(DirectoryAction::Back),
            DirectoryOutcome::Show(DirectoryView::Details(THREE))
        );
    }

    #[test]
    fn test_back_from_list_leaves() {
        assert_eq!(
            DirectoryView::List.apply(DirectoryAction::Back),
            DirectoryOutcome::Leave
        );
    }

    #[test]
    fn test_no_deep_jumps() {
        assert_eq!(
            DirectoryView::Contact(ONE).apply(DirectoryAction::ViewDetails(THREE)),
            DirectoryOutcome::Show(DirectoryView::Contact(ONE))
        );
        assert_eq!(
            DirectoryView::Details(ONE).apply(DirectoryAction::ViewDetails(THREE)),
            DirectoryOutcome::Show(DirectoryView::Details(ONE))
        );
    }
}
