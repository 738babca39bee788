//! Session-scoped data stored in tower-sessions.

use minutemart_core::{Email, UserId};
use serde::{Deserialize, Serialize};

use crate::commerce::types::UserProfile;

/// Signed-in shopper, as stored in the session after login.
///
/// This is a snapshot of the commerce API's user record at login time.
/// Handlers that need fresh profile data (phone, verification state)
/// re-fetch it from the API instead of trusting this copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: UserId,
    pub email: Email,
    pub full_name: String,
    pub is_admin: bool,
}

impl From<UserProfile> for CurrentUser {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            email: profile.email,
            full_name: profile.full_name,
            is_admin: profile.is_admin,
        }
    }
}

/// Session storage keys.
pub mod keys {
    /// Bearer token for the commerce API (`String`).
    pub const ACCESS_TOKEN: &str = "access_token";
    /// Serialized [`CurrentUser`](super::CurrentUser).
    pub const CURRENT_USER: &str = "current_user";
    /// Cart registry key for this session (`Uuid`).
    pub const CART_KEY: &str = "cart_key";
    /// Cached delivery address (`Address` as JSON), written on every
    /// successful address resolution and read back when the commerce
    /// API is unreachable.
    pub const DEFAULT_ADDRESS: &str = "default_address";
}
