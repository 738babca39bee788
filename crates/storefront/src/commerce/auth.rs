//! Account endpoints: registration, OTP verification, login, profile.

use reqwest::Method;
use secrecy::SecretString;
use tracing::instrument;

use super::types::{
    Acknowledgement, EmailRequest, LoginRequest, LoginResponse, ProfileResponse, ProfileUpdate,
    RegisterRequest, Registered, ResetPasswordRequest, VerifyOtpRequest,
};
use super::{ApiError, CommerceClient};

impl CommerceClient {
    /// Register a new account. The backend emails an OTP to verify.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is taken or the call fails.
    #[instrument(skip_all)]
    pub async fn register(&self, payload: &RegisterRequest) -> Result<Registered, ApiError> {
        let builder = self
            .request(Method::POST, "/api/auth/register", None)
            .json(payload);
        self.fetch_json(builder).await
    }

    /// Confirm the OTP sent at registration.
    ///
    /// # Errors
    ///
    /// Returns an error if the OTP is wrong or expired.
    #[instrument(skip_all)]
    pub async fn verify_otp(&self, payload: &VerifyOtpRequest) -> Result<Acknowledgement, ApiError> {
        let builder = self
            .request(Method::POST, "/api/auth/verify-otp", None)
            .json(payload);
        self.fetch_json(builder).await
    }

    /// Ask for a fresh OTP.
    ///
    /// # Errors
    ///
    /// Returns an error if the commerce API call fails.
    #[instrument(skip_all)]
    pub async fn resend_otp(&self, payload: &EmailRequest) -> Result<Acknowledgement, ApiError> {
        let builder = self
            .request(Method::POST, "/api/auth/resend-otp", None)
            .json(payload);
        self.fetch_json(builder).await
    }

    /// Exchange credentials for a bearer token and user record.
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

    /// Start a password reset by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the commerce API call fails.
    #[instrument(skip_all)]
    pub async fn forgot_password(&self, payload: &EmailRequest) -> Result<Acknowledgement, ApiError> {
        let builder = self
            .request(Method::POST, "/api/auth/forgot-password", None)
            .json(payload);
        self.fetch_json(builder).await
    }

    /// Complete a password reset with the emailed OTP.
    ///
    /// # Errors
    ///
    /// Returns an error if the OTP is wrong or expired.
    #[instrument(skip_all)]
    pub async fn reset_password(
        &self,
        payload: &ResetPasswordRequest,
    ) -> Result<Acknowledgement, ApiError> {
        let builder = self
            .request(Method::POST, "/api/auth/reset-password", None)
            .json(payload);
        self.fetch_json(builder).await
    }

    /// Fetch the signed-in user's profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is invalid or the call fails.
    #[instrument(skip_all)]
    pub async fn profile(&self, token: &SecretString) -> Result<ProfileResponse, ApiError> {
        let builder = self.request(Method::GET, "/api/auth/profile", Some(token));
        self.fetch_json(builder).await
    }

    /// Update name and phone on the signed-in user's profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is invalid or the call fails.
    #[instrument(skip_all)]
    pub async fn update_profile(
        &self,
        token: &SecretString,
        payload: &ProfileUpdate,
    ) -> Result<ProfileResponse, ApiError> {
        let builder = self
            .request(Method::PUT, "/api/auth/profile", Some(token))
            .json(payload);
        self.fetch_json(builder).await
    }

    /// Permanently delete the signed-in user's account.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is invalid or the call fails.
    #[instrument(skip_all)]
    pub async fn delete_account(&self, token: &SecretString) -> Result<Acknowledgement, ApiError> {
        let builder = self.request(Method::DELETE, "/api/auth/delete-account", Some(token));
        self.fetch_json(builder).await
    }
}
