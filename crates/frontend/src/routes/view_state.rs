//! Top-level view selection.
//!
//! Exactly one [`AppView`] is active at a time. All transitions go through
//! [`ShellState::dispatch`]; the router renders the result with one
//! exhaustive `match`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppView {
    #[default]
    Home,
    VendorRegistration,
    SupplierRegistration,
    SupplierDirectory,
    VendorDashboard,
}

impl AppView {
    /// Page id used for the root element and in logs
    pub fn key(&self) -> &'static str {
        match self {
            AppView::Home => "home",
            AppView::VendorRegistration => "register",
            AppView::SupplierRegistration => "supplier-register",
            AppView::SupplierDirectory => "suppliers",
            AppView::VendorDashboard => "dashboard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Any "Join as Vendor" / "Start as Vendor" / "Browse Suppliers" button
    StartAsVendor,
    JoinAsSupplier,
    OpenDashboard,
    Back,
    VendorRegistered,
    SupplierRegistered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShellState {
    pub view: AppView,
    pub has_registered_as_vendor: bool,
}

/// Outcome of a dispatch, for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Moved { from: AppView, to: AppView },
    Ignored,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where `action` leads from the current state, `None` if it does not apply
    pub fn next(&self, action: NavAction) -> Option<(AppView, bool)> {
        use AppView::*;
        use NavAction::*;

        let registered = self.has_registered_as_vendor;
        match (self.view, action) {
            (Home, StartAsVendor) if registered => Some((SupplierDirectory, registered)),
            (Home, StartAsVendor) => Some((VendorRegistration, registered)),
            (Home, JoinAsSupplier) => Some((SupplierRegistration, registered)),
            (Home, OpenDashboard) if registered => Some((VendorDashboard, registered)),
            (Home, OpenDashboard) => Some((VendorRegistration, registered)),
            (VendorRegistration, VendorRegistered) => Some((Home, true)),
            (SupplierRegistration, SupplierRegistered) => Some((Home, registered)),
            (Home, Back) => None,
            (_, Back) => Some((Home, registered)),
            _ => None,
        }
    }

    pub fn dispatch(&mut self, action: NavAction) -> Transition {
        match self.next(action) {
            Some((to, registered)) => {
                let from = self.view;
                self.view = to;
                self.has_registered_as_vendor = registered;
                Transition::Moved { from, to }
            }
            None => Transition::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(view: AppView, registered: bool) -> ShellState {
        ShellState {
            view,
            has_registered_as_vendor: registered,
        }
    }

    #[test]
    fn test_starts_at_home_unregistered() {
        let s = ShellState::new();
        assert_eq!(s.view, AppView::Home);
        assert!(!s.has_registered_as_vendor);
    }

    #[test]
    fn test_vendor_registration_round_trip() {
        let mut s = ShellState::new();
        s.dispatch(NavAction::StartAsVendor);
        assert_eq!(s.view, AppView::VendorRegistration);

        let t = s.dispatch(NavAction::VendorRegistered);
        assert_eq!(
            t,
            Transition::Moved {
                from: AppView::VendorRegistration,
                to: AppView::Home
            }
        );
        assert!(s.has_registered_as_vendor);

        // Registered vendors skip the form
        s.dispatch(NavAction::StartAsVendor);
        assert_eq!(s.view, AppView::SupplierDirectory);
        s.dispatch(NavAction::Back);
        assert_eq!(s, state(AppView::Home, true));
    }

    #[test]
    fn test_back_from_registration_keeps_flag_unset() {
        let mut s = ShellState::new();
        s.dispatch(NavAction::StartAsVendor);
        s.dispatch(NavAction::Back);
        assert_eq!(s, state(AppView::Home, false));
        s.dispatch(NavAction::StartAsVendor);
        assert_eq!(s.view, AppView::VendorRegistration);
    }

    #[test]
    fn test_supplier_registration_has_no_short_circuit() {
        for registered in [false, true] {
            let mut s = state(AppView::Home, registered);
            s.dispatch(NavAction::JoinAsSupplier);
            assert_eq!(s.view, AppView::SupplierRegistration);
            s.dispatch(NavAction::SupplierRegistered);
            assert_eq!(s, state(AppView::Home, registered));
        }
    }

    #[test]
    fn test_dashboard_requires_registration() {
        let mut s = ShellState::new();
        s.dispatch(NavAction::OpenDashboard);
        assert_eq!(s.view, AppView::VendorRegistration);

        let mut s = state(AppView::Home, true);
        s.dispatch(NavAction::OpenDashboard);
        assert_eq!(s.view, AppView::VendorDashboard);
        s.dispatch(NavAction::Back);
        assert_eq!(s.view, AppView::Home);
    }

    #[test]
    fn test_back_from_every_view_returns_home() {
        for view in [
            AppView::VendorRegistration,
            AppView::SupplierRegistration,
            AppView::SupplierDirectory,
            AppView::VendorDashboard,
        ] {
            let mut s = state(view, false);
            s.dispatch(NavAction::Back);
            assert_eq!(s.view, AppView::Home, "back from {:?}", view);
        }
    }

    #[test]
    fn test_unrelated_actions_are_ignored() {
        let cases = [
            (AppView::Home, NavAction::Back),
            (AppView::Home, NavAction::VendorRegistered),
            (AppView::SupplierDirectory, NavAction::StartAsVendor),
            (AppView::SupplierRegistration, NavAction::VendorRegistered),
            (AppView::VendorRegistration, NavAction::SupplierRegistered),
            (AppView::VendorDashboard, NavAction::OpenDashboard),
        ];
        for (view, action) in cases {
            let mut s = state(view, false);
            assert_eq!(s.dispatch(action), Transition::Ignored);
            assert_eq!(s, state(view, false));
        }
    }

    #[test]
    fn test_view_keys_are_unique() {
        let keys = [
            AppView::Home.key(),
            AppView::VendorRegistration.key(),
            AppView::SupplierRegistration.key(),
            AppView::SupplierDirectory.key(),
            AppView::VendorDashboard.key(),
        ];
        let mut sorted = keys.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), keys.len());
    }
}
