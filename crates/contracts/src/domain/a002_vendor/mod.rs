pub mod aggregate;
pub mod registration;

pub use aggregate::{VendorProfile, VendorProfileField};
pub use registration::{VendorRegistrationField, VendorRegistrationForm};
