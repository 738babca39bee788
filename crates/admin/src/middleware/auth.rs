//! Authentication extractors for the three dashboard personas.
//!
//! Tokens live in the server-side session; browsers only ever see the
//! session cookie. Each persona has its own extractor so a vendor
//! session cannot reach admin handlers and vice versa: the wrong
//! identity class is simply "not signed in" here, and the commerce API
//! re-checks the role behind us anyway.

use axum::Json;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use secrecy::SecretString;
use serde::de::DeserializeOwned;
use serde_json::json;
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::session::keys;
use crate::models::{AdminUser, PartnerIdentity, VendorIdentity};

/// A signed-in administrator's credentials for this request.
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// Bearer token forwarded to the commerce API.
    pub token: SecretString,
    /// The administrator, as recorded at login.
    pub user: AdminUser,
}

/// A signed-in vendor's credentials for this request.
#[derive(Debug, Clone)]
pub struct VendorSession {
    pub token: SecretString,
    pub vendor: VendorIdentity,
}

/// A signed-in delivery partner's credentials for this request.
#[derive(Debug, Clone)]
pub struct PartnerSession {
    pub token: SecretString,
    pub partner: PartnerIdentity,
}

/// Extractor that rejects requests without an admin session.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AdminSession);

/// Extractor that rejects requests without a vendor session.
#[derive(Debug, Clone)]
pub struct RequireVendor(pub VendorSession);

/// Extractor that rejects requests without a partner session.
#[derive(Debug, Clone)]
pub struct RequirePartner(pub PartnerSession);

/// Rejection shared by the persona extractors.
#[derive(Debug)]
pub struct AuthRejection(&'static str);

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (StatusCode::UNAUTHORIZED, Json(json!({ "error": self.0 }))).into_response()
    }
}

/// Read one persona's token and identity out of the session.
async fn load_identity<T: DeserializeOwned>(
    parts: &mut Parts,
    token_key: &'static str,
    identity_key: &'static str,
) -> Option<(SecretString, T)> {
    let session = parts.extensions.get::<Session>()?.clone();

    let token: String = session.get(token_key).await.ok()??;
    let identity: T = session.get(identity_key).await.ok()??;

    Some((SecretString::from(token), identity))
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        load_identity(parts, keys::ADMIN_TOKEN, keys::ADMIN_USER)
            .await
            .map(|(token, user)| Self(AdminSession { token, user }))
            .ok_or(AuthRejection("Administrator login required"))
    }
}

impl<S> FromRequestParts<S> for RequireVendor
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        load_identity(parts, keys::VENDOR_TOKEN, keys::VENDOR_PROFILE)
            .await
            .map(|(token, vendor)| Self(VendorSession { token, vendor }))
            .ok_or(AuthRejection("Vendor login required"))
    }
}

impl<S> FromRequestParts<S> for RequirePartner
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        load_identity(parts, keys::PARTNER_TOKEN, keys::PARTNER_PROFILE)
            .await
            .map(|(token, partner)| Self(PartnerSession { token, partner }))
            .ok_or(AuthRejection("Delivery partner login required"))
    }
}

/// Record a successful administrator login in the session.
///
/// # Errors
///
/// Returns an error if the session store rejects the write.
pub async fn establish_admin(
    session: &Session,
    access_token: String,
    user: &AdminUser,
) -> Result<(), AppError> {
    session.insert(keys::ADMIN_TOKEN, access_token).await?;
    session.insert(keys::ADMIN_USER, user).await?;
    Ok(())
}

/// Record a successful vendor login in the session.
///
/// # Errors
///
/// Returns an error if the session store rejects the write.
pub async fn establish_vendor(
    session: &Session,
    access_token: String,
    vendor: &VendorIdentity,
) -> Result<(), AppError> {
    session.insert(keys::VENDOR_TOKEN, access_token).await?;
    session.insert(keys::VENDOR_PROFILE, vendor).await?;
    Ok(())
}

/// Record a successful delivery partner login in the session.
///
/// # Errors
///
/// Returns an error if the session store rejects the write.
pub async fn establish_partner(
    session: &Session,
    access_token: String,
    partner: &PartnerIdentity,
) -> Result<(), AppError> {
    session.insert(keys::PARTNER_TOKEN, access_token).await?;
    session.insert(keys::PARTNER_PROFILE, partner).await?;
    Ok(())
}

/// Remove the administrator identity from the session.
///
/// The other personas stay signed in: the same browser may hold, say,
/// a vendor session alongside an expired admin one.
///
/// # Errors
///
/// Returns an error if the session store rejects the removal.
pub async fn clear_admin(session: &Session) -> Result<(), AppError> {
    session.remove::<String>(keys::ADMIN_TOKEN).await?;
    session.remove::<AdminUser>(keys::ADMIN_USER).await?;
    Ok(())
}

/// Remove the vendor identity from the session.
///
/// # Errors
///
/// Returns an error if the session store rejects the removal.
pub async fn clear_vendor(session: &Session) -> Result<(), AppError> {
    session.remove::<String>(keys::VENDOR_TOKEN).await?;
    session.remove::<VendorIdentity>(keys::VENDOR_PROFILE).await?;
    Ok(())
}

/// Remove the delivery partner identity from the session.
///
/// # Errors
///
/// Returns an error if the session store rejects the removal.
pub async fn clear_partner(session: &Session) -> Result<(), AppError> {
    session.remove::<String>(keys::PARTNER_TOKEN).await?;
    session
        .remove::<PartnerIdentity>(keys::PARTNER_PROFILE)
        .await?;
    Ok(())
}
