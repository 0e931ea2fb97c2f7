//! Supplier details page (MVVM):
//! - view_model.rs: profile lookup and the text derived from it
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::SupplierDetailsPage;
pub use view_model::SupplierDetailsVm;
