//! Domain models for the admin service.

pub mod session;

pub use session::{AdminUser, PartnerIdentity, VendorIdentity};
