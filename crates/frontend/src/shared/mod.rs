pub mod components;
pub mod config;
pub mod form_submit;
pub mod icons;
pub mod list_utils;
pub mod page_frame;
pub mod page_standard;
pub mod toast;
