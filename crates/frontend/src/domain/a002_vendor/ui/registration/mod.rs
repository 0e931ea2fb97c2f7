mod view;
mod view_model;

pub use view::VendorRegistration;
pub use view_model::VendorRegistrationVm;
