mod view;
mod view_model;

pub use view::SupplierRegistration;
pub use view_model::SupplierRegistrationVm;
