pub mod form;

pub use form::{SupplierRegistrationField, SupplierRegistrationForm};
