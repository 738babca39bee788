//! Delivery address book.

use minutemart_core::{Address, AddressId};
use reqwest::Method;
use secrecy::SecretString;
use tracing::instrument;

use super::types::{Acknowledgement, AddressCreated, AddressList, AddressPayload};
use super::{ApiError, CommerceClient};

impl CommerceClient {
    /// List the caller's saved addresses.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is invalid or the call fails.
    #[instrument(skip(self, token))]
    pub async fn addresses(&self, token: &SecretString) -> Result<Vec<Address>, ApiError> {
        let builder = self.request(Method::GET, "/api/addresses/", Some(token));
        let list: AddressList = self.fetch_json(builder).await?;
        Ok(list.addresses)
    }

    /// Save a new address.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing or the call
    /// fails.
    #[instrument(skip(self, token, payload))]
    pub async fn create_address(
        &self,
        token: &SecretString,
        payload: &AddressPayload,
    ) -> Result<AddressCreated, ApiError> {
        let builder = self
            .request(Method::POST, "/api/addresses/", Some(token))
            .json(payload);
        self.fetch_json(builder).await
    }

    /// Replace an existing address.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is not the caller's or the call
    /// fails.
    #[instrument(skip(self, token, payload))]
    pub async fn update_address(
        &self,
        token: &SecretString,
        id: AddressId,
        payload: &AddressPayload,
    ) -> Result<AddressCreated, ApiError> {
        let builder = self
            .request(Method::PUT, &format!("/api/addresses/{id}"), Some(token))
            .json(payload);
        self.fetch_json(builder).await
    }

    /// Delete an address.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is not the caller's or the call
    /// fails.
    #[instrument(skip(self, token))]
    pub async fn delete_address(
        &self,
        token: &SecretString,
        id: AddressId,
    ) -> Result<Acknowledgement, ApiError> {
        let builder = self.request(Method::DELETE, &format!("/api/addresses/{id}"), Some(token));
        self.fetch_json(builder).await
    }

    /// Mark one address as the delivery default.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is not the caller's or the call
    /// fails.
    #[instrument(skip(self, token))]
    pub async fn set_default_address(
        &self,
        token: &SecretString,
        id: AddressId,
    ) -> Result<Acknowledgement, ApiError> {
        let builder = self.request(
            Method::PATCH,
            &format!("/api/addresses/{id}/default"),
            Some(token),
        );
        self.fetch_json(builder).await
    }
}
