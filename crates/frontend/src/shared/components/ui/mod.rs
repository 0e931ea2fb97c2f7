pub mod badge;
pub mod button;
pub mod field_group;
pub mod form_field;
pub mod input;
pub mod select;
pub mod textarea;

pub use badge::{Badge, BadgeTone};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use form_field::form_field;
pub use input::Input;
pub use select::Select;
pub use textarea::Textarea;
