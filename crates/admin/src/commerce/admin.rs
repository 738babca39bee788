//! The `/api/admin/*` management surface.
//!
//! Every method here requires an administrator token; the backend
//! enforces the role on its side, so a stale or demoted token comes
//! back as [`ApiError::AuthRequired`] and signs the operator out.

use minutemart_core::{OrderId, PartnerId, ProductId, UserId, VendorId};
use reqwest::Method;
use secrecy::SecretString;
use tracing::instrument;

use super::types::{
    OrderListQuery, PartnerListQuery, PendingProductQuery, UserListQuery, VendorListQuery,
};
use super::{ApiError, CommerceClient};

impl CommerceClient {
    /// Aggregate store statistics for the dashboard landing page.
    ///
    /// # Errors
    ///
    /// Returns an error if the commerce API call fails.
    #[instrument(skip_all)]
    pub async fn dashboard_stats(&self, token: &SecretString) -> Result<serde_json::Value, ApiError> {
        let builder = self.request(Method::GET, "/api/admin/dashboard/stats", Some(token));
        self.forward(builder).await
    }

    /// Paginated user list with search and role filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the commerce API call fails.
    #[instrument(skip_all)]
    pub async fn users(
        &self,
        token: &SecretString,
        query: &UserListQuery,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self
            .request(Method::GET, "/api/admin/users", Some(token))
            .query(query);
        self.forward(builder).await
    }

    /// One user with recent orders and addresses.
    ///
    /// # Errors
    ///
    /// Returns an error if the user does not exist or the call fails.
    #[instrument(skip_all, fields(user_id = %id))]
    pub async fn user(&self, token: &SecretString, id: UserId) -> Result<serde_json::Value, ApiError> {
        let builder = self.request(Method::GET, &format!("/api/admin/users/{id}"), Some(token));
        self.forward(builder).await
    }

    /// Update a user's profile fields or role flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the user does not exist or the call fails.
    #[instrument(skip_all, fields(user_id = %id))]
    pub async fn update_user(
        &self,
        token: &SecretString,
        id: UserId,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self
            .request(Method::PUT, &format!("/api/admin/users/{id}"), Some(token))
            .json(payload);
        self.forward(builder).await
    }

    /// Delete a user and everything hanging off them.
    ///
    /// # Errors
    ///
    /// Returns an error if the user does not exist, is the caller, or
    /// the call fails.
    #[instrument(skip_all, fields(user_id = %id))]
    pub async fn delete_user(
        &self,
        token: &SecretString,
        id: UserId,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self.request(Method::DELETE, &format!("/api/admin/users/{id}"), Some(token));
        self.forward(builder).await
    }

    /// Paginated order list across all customers.
    ///
    /// # Errors
    ///
    /// Returns an error if the commerce API call fails.
    #[instrument(skip_all)]
    pub async fn all_orders(
        &self,
        token: &SecretString,
        query: &OrderListQuery,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self
            .request(Method::GET, "/api/admin/orders", Some(token))
            .query(query);
        self.forward(builder).await
    }

    /// One order with line items, customer, and address.
    ///
    /// # Errors
    ///
    /// Returns an error if the order does not exist or the call fails.
    #[instrument(skip_all, fields(order_id = %id))]
    pub async fn order_detail(
        &self,
        token: &SecretString,
        id: OrderId,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self.request(Method::GET, &format!("/api/admin/orders/{id}"), Some(token));
        self.forward(builder).await
    }

    /// Move an order to a new fulfillment status.
    ///
    /// # Errors
    ///
    /// Returns an error if the status is not one the backend accepts.
    #[instrument(skip_all, fields(order_id = %id))]
    pub async fn update_order_status(
        &self,
        token: &SecretString,
        id: OrderId,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self
            .request(
                Method::PUT,
                &format!("/api/admin/orders/{id}/status"),
                Some(token),
            )
            .json(payload);
        self.forward(builder).await
    }

    /// Store-wide settings blob.
    ///
    /// # Errors
    ///
    /// Returns an error if the commerce API call fails.
    #[instrument(skip_all)]
    pub async fn settings(&self, token: &SecretString) -> Result<serde_json::Value, ApiError> {
        let builder = self.request(Method::GET, "/api/admin/settings", Some(token));
        self.forward(builder).await
    }

    /// Replace store-wide settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the commerce API call fails.
    #[instrument(skip_all)]
    pub async fn update_settings(
        &self,
        token: &SecretString,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self
            .request(Method::PUT, "/api/admin/settings", Some(token))
            .json(payload);
        self.forward(builder).await
    }

    /// Paginated vendor list with approval-state filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the commerce API call fails.
    #[instrument(skip_all)]
    pub async fn vendors(
        &self,
        token: &SecretString,
        query: &VendorListQuery,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self
            .request(Method::GET, "/api/admin/vendors", Some(token))
            .query(query);
        self.forward(builder).await
    }

    /// One vendor with assigned categories and recent products.
    ///
    /// # Errors
    ///
    /// Returns an error if the vendor does not exist or the call fails.
    #[instrument(skip_all, fields(vendor_id = %id))]
    pub async fn vendor(
        &self,
        token: &SecretString,
        id: VendorId,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self.request(Method::GET, &format!("/api/admin/vendors/{id}"), Some(token));
        self.forward(builder).await
    }

    /// Create a vendor account with generated credentials. The backend
    /// emails the temporary password to the vendor.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is already registered.
    #[instrument(skip_all)]
    pub async fn create_vendor(
        &self,
        token: &SecretString,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self
            .request(Method::POST, "/api/admin/vendors/create", Some(token))
            .json(payload);
        self.forward(builder).await
    }

    /// Update a vendor's details or approval/active flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the vendor does not exist or the call fails.
    #[instrument(skip_all, fields(vendor_id = %id))]
    pub async fn update_vendor(
        &self,
        token: &SecretString,
        id: VendorId,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self
            .request(Method::PUT, &format!("/api/admin/vendors/{id}"), Some(token))
            .json(payload);
        self.forward(builder).await
    }

    /// Delete a vendor and their catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the vendor does not exist or the call fails.
    #[instrument(skip_all, fields(vendor_id = %id))]
    pub async fn delete_vendor(
        &self,
        token: &SecretString,
        id: VendorId,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self.request(
            Method::DELETE,
            &format!("/api/admin/vendors/{id}"),
            Some(token),
        );
        self.forward(builder).await
    }

    /// Replace the set of categories a vendor may sell under.
    ///
    /// # Errors
    ///
    /// Returns an error if the vendor does not exist or the payload
    /// names no categories.
    #[instrument(skip_all, fields(vendor_id = %id))]
    pub async fn assign_vendor_categories(
        &self,
        token: &SecretString,
        id: VendorId,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self
            .request(
                Method::POST,
                &format!("/api/admin/vendors/{id}/categories"),
                Some(token),
            )
            .json(payload);
        self.forward(builder).await
    }

    /// Vendor products waiting for approval.
    ///
    /// # Errors
    ///
    /// Returns an error if the commerce API call fails.
    #[instrument(skip_all)]
    pub async fn pending_products(
        &self,
        token: &SecretString,
        query: &PendingProductQuery,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self
            .request(Method::GET, "/api/admin/products/pending", Some(token))
            .query(query);
        self.forward(builder).await
    }

    /// Approve or reject a vendor product. Rejection also deactivates
    /// the listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the product does not exist or the call fails.
    #[instrument(skip_all, fields(product_id = %id))]
    pub async fn approve_product(
        &self,
        token: &SecretString,
        id: ProductId,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self
            .request(
                Method::PUT,
                &format!("/api/admin/products/{id}/approve"),
                Some(token),
            )
            .json(payload);
        self.forward(builder).await
    }

    /// Paginated delivery partner list with verification filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the commerce API call fails.
    #[instrument(skip_all)]
    pub async fn delivery_partners(
        &self,
        token: &SecretString,
        query: &PartnerListQuery,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self
            .request(Method::GET, "/api/admin/delivery-partners", Some(token))
            .query(query);
        self.forward(builder).await
    }

    /// One delivery partner with their recent deliveries.
    ///
    /// # Errors
    ///
    /// Returns an error if the partner does not exist or the call fails.
    #[instrument(skip_all, fields(partner_id = %id))]
    pub async fn delivery_partner(
        &self,
        token: &SecretString,
        id: PartnerId,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self.request(
            Method::GET,
            &format!("/api/admin/delivery-partners/{id}"),
            Some(token),
        );
        self.forward(builder).await
    }

    /// Update a partner's details or verified/active flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the partner does not exist or the call fails.
    #[instrument(skip_all, fields(partner_id = %id))]
    pub async fn update_delivery_partner(
        &self,
        token: &SecretString,
        id: PartnerId,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self
            .request(
                Method::PUT,
                &format!("/api/admin/delivery-partners/{id}"),
                Some(token),
            )
            .json(payload);
        self.forward(builder).await
    }

    /// Remove a delivery partner.
    ///
    /// # Errors
    ///
    /// Returns an error if the partner does not exist or the call fails.
    #[instrument(skip_all, fields(partner_id = %id))]
    pub async fn delete_delivery_partner(
        &self,
        token: &SecretString,
        id: PartnerId,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self.request(
            Method::DELETE,
            &format!("/api/admin/delivery-partners/{id}"),
            Some(token),
        );
        self.forward(builder).await
    }
}
