//! Shared VendorConnect types and pure logic.
//!
//! Everything here is platform independent: the frontend renders it, the
//! unit tests exercise it on the host.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
