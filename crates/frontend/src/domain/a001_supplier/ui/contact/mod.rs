//! Contact supplier page (MVVM):
//! - view_model.rs: inquiry form state and the submit command
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::ContactSupplier;
pub use view_model::ContactSupplierVm;
