//! Wire types shared between the dashboards and the commerce API.
//!
//! Only the shapes this service actually inspects are typed: login
//! envelopes (to pick out tokens and identities) and list filters (to
//! forward query strings faithfully). Everything else moves through as
//! raw JSON.

use minutemart_core::{CategoryId, Email, UserId, VendorId};
use serde::{Deserialize, Serialize};

use crate::models::{PartnerIdentity, VendorIdentity};

/// User record as the commerce API reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub email: Email,
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_verified: bool,
}

/// Credentials posted by any of the three dashboards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful administrator login response.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: UserProfile,
}

/// Successful vendor login response.
#[derive(Debug, Clone, Deserialize)]
pub struct VendorAuthorized {
    pub access_token: String,
    pub vendor: VendorIdentity,
}

/// Successful delivery partner login response.
#[derive(Debug, Clone, Deserialize)]
pub struct PartnerAuthorized {
    pub access_token: String,
    pub partner: PartnerIdentity,
}

/// Filters for the admin user list.
///
/// Doubles as the axum query extractor and the outbound reqwest query,
/// so the dashboard's filter string passes through unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// `admin`, `user`, or unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// `true`, `false`, or unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<String>,
}

/// Filters for the admin order list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Filters for the admin vendor list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VendorListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// `approved`, `pending`, or `inactive`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Filters for the delivery partner list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartnerListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// `verified`, `pending`, or `inactive`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Filters for the shared catalog product list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

/// Filters for the pending product approval queue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PendingProductQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<VendorId>,
}

/// Filters for a vendor's own product list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VendorProductQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
}

/// Status filter shared by the vendor and delivery order lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// For delivery: `available` lists unclaimed orders ready to go
    /// out; anything else lists the partner's own assignments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
