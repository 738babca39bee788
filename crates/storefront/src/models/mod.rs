//! Domain models for the storefront.

pub mod session;

pub use session::CurrentUser;
