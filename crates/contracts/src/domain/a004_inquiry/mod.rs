pub mod form;

pub use form::{InquiryField, InquiryForm};
