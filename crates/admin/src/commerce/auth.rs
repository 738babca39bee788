//! Token-acquiring endpoints for the three dashboard personas.

use reqwest::Method;
use tracing::instrument;

use super::types::{LoginRequest, LoginResponse, PartnerAuthorized, VendorAuthorized};
use super::{ApiError, CommerceClient};

impl CommerceClient {
    /// Exchange administrator credentials for a bearer token and user
    /// record. Whether that user is actually an administrator is the
    /// caller's problem; the backend issues tokens to any valid login.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::AuthRequired`] with the backend's message on
    /// bad credentials.
    #[instrument(skip_all)]
    pub async fn login(&self, payload: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let builder = self
            .request(Method::POST, "/api/auth/login", None)
            .json(payload);
        self.fetch_json(builder).await
    }

    /// Register a vendor account and profile in one call.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is taken or the call fails.
    #[instrument(skip_all)]
    pub async fn vendor_register(
        &self,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self
            .request(Method::POST, "/api/vendor/register", None)
            .json(payload);
        self.forward(builder).await
    }

    /// Exchange vendor credentials for a token and vendor identity.
    ///
    /// The backend refuses logins for unapproved or deactivated
    /// vendors, so a success here means the vendor may trade.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::AuthRequired`] on bad credentials or a
    /// not-yet-approved account.
    #[instrument(skip_all)]
    pub async fn vendor_login(&self, payload: &LoginRequest) -> Result<VendorAuthorized, ApiError> {
        let builder = self
            .request(Method::POST, "/api/vendor/login", None)
            .json(payload);
        self.fetch_json(builder).await
    }

    /// Register a delivery partner. New partners wait for an
    /// administrator to verify them before they can log in.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is taken or the call fails.
    #[instrument(skip_all)]
    pub async fn delivery_register(
        &self,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self
            .request(Method::POST, "/api/delivery/register", None)
            .json(payload);
        self.forward(builder).await
    }

    /// Exchange delivery partner credentials for a token and partner
    /// identity.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::AuthRequired`] on bad credentials or an
    /// unverified account.
    #[instrument(skip_all)]
    pub async fn delivery_login(
        &self,
        payload: &LoginRequest,
    ) -> Result<PartnerAuthorized, ApiError> {
        let builder = self
            .request(Method::POST, "/api/delivery/login", None)
            .json(payload);
        self.fetch_json(builder).await
    }
}
