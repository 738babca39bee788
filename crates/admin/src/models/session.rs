//! Session-scoped identities stored in tower-sessions.
//!
//! The admin service serves three dashboards, each with its own token
//! class on the commerce API. A session holds at most one identity per
//! class; the session keys keep them from stepping on each other.

use minutemart_core::{Email, PartnerId, UserId, VendorId};
use serde::{Deserialize, Serialize};

use crate::commerce::types::UserProfile;

/// Signed-in administrator, as stored in the session after login.
///
/// Only stored once the login response's profile carried `is_admin`;
/// the commerce API re-checks the role on every proxied call anyway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminUser {
    pub id: UserId,
    pub email: Email,
    pub full_name: String,
}

impl From<UserProfile> for AdminUser {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            email: profile.email,
            full_name: profile.full_name,
        }
    }
}

/// Signed-in vendor, deserialized straight from the vendor login
/// response and stored as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VendorIdentity {
    pub id: VendorId,
    pub user_id: UserId,
    pub email: Email,
    pub business_name: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Signed-in delivery partner, from the delivery login response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartnerIdentity {
    pub id: PartnerId,
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Session storage keys.
pub mod keys {
    /// Admin bearer token for the commerce API (`String`).
    pub const ADMIN_TOKEN: &str = "admin_token";
    /// Serialized [`AdminUser`](super::AdminUser).
    pub const ADMIN_USER: &str = "admin_user";
    /// Vendor bearer token (`String`).
    pub const VENDOR_TOKEN: &str = "vendor_token";
    /// Serialized [`VendorIdentity`](super::VendorIdentity).
    pub const VENDOR_PROFILE: &str = "vendor_profile";
    /// Delivery partner bearer token (`String`).
    pub const PARTNER_TOKEN: &str = "partner_token";
    /// Serialized [`PartnerIdentity`](super::PartnerIdentity).
    pub const PARTNER_PROFILE: &str = "partner_profile";
}
