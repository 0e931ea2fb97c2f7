pub mod a001_supplier;
pub mod a002_vendor;
pub mod a003_supplier_application;
