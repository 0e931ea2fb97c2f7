pub mod contact;
pub mod details;
pub mod directory;
pub mod list;

pub use directory::SupplierDirectory;
