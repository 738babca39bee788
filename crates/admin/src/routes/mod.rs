//! Route handlers and router assembly.
//!
//! # Route tree
//!
//! ```text
//! GET    /api/products                          catalog (open)
//! GET    /api/products/{id}                     product detail (open)
//! GET    /api/categories                        category list (open)
//!
//! POST   /api/admin/login                       administrator sign-in (rate limited)
//! POST   /api/admin/logout                      sign out
//! GET    /api/admin/me                          session snapshot (admin)
//! GET    /api/admin/dashboard/stats             store-wide numbers (admin)
//! GET    /api/admin/users                       customer list (admin)
//! GET    /api/admin/users/{id}                  customer detail (admin)
//! PUT    /api/admin/users/{id}                  update customer (admin)
//! DELETE /api/admin/users/{id}                  delete customer (admin)
//! GET    /api/admin/orders                      order list (admin)
//! GET    /api/admin/orders/{id}                 order detail (admin)
//! PUT    /api/admin/orders/{id}/status          move order status (admin)
//! POST   /api/admin/products                    create product (admin)
//! PUT    /api/admin/products/{id}               update product (admin)
//! DELETE /api/admin/products/{id}               retire product (admin)
//! GET    /api/admin/products/pending            approval queue (admin)
//! PUT    /api/admin/products/{id}/approve       approve product (admin)
//! POST   /api/admin/categories                  create category (admin)
//! PUT    /api/admin/categories/{id}             update category (admin)
//! DELETE /api/admin/categories/{id}             retire category (admin)
//! GET    /api/admin/coupons                     coupon list (admin)
//! POST   /api/admin/coupons                     create coupon (admin)
//! PUT    /api/admin/coupons/{id}                update coupon (admin)
//! DELETE /api/admin/coupons/{id}                retire coupon (admin)
//! GET    /api/admin/settings                    store settings (admin)
//! PUT    /api/admin/settings                    update settings (admin)
//! GET    /api/admin/vendors                     vendor list (admin)
//! POST   /api/admin/vendors/create              create approved vendor (admin)
//! GET    /api/admin/vendors/{id}                vendor detail (admin)
//! PUT    /api/admin/vendors/{id}                update/approve vendor (admin)
//! DELETE /api/admin/vendors/{id}                delete vendor (admin)
//! POST   /api/admin/vendors/{id}/categories     assign categories (admin)
//! GET    /api/admin/delivery-partners           partner list (admin)
//! GET    /api/admin/delivery-partners/{id}      partner detail (admin)
//! PUT    /api/admin/delivery-partners/{id}      update/verify partner (admin)
//! DELETE /api/admin/delivery-partners/{id}      delete partner (admin)
//!
//! POST   /api/vendor/register                   vendor sign-up (rate limited)
//! POST   /api/vendor/login                      vendor sign-in (rate limited)
//! POST   /api/vendor/logout                     sign out
//! GET    /api/vendor/me                         session snapshot (vendor)
//! GET    /api/vendor/profile                    business profile (vendor)
//! PUT    /api/vendor/profile                    update profile (vendor)
//! GET    /api/vendor/products                   own products (vendor)
//! POST   /api/vendor/products                   create product (vendor)
//! PUT    /api/vendor/products/{id}              update product (vendor)
//! DELETE /api/vendor/products/{id}              retire product (vendor)
//! GET    /api/vendor/dashboard/stats            own numbers (vendor)
//! GET    /api/vendor/orders                     own orders (vendor)
//! GET    /api/vendor/orders/{id}                order detail (vendor)
//! PUT    /api/vendor/orders/{id}/status         move order status (vendor)
//! DELETE /api/vendor/orders/{id}                delete finished order (vendor)
//!
//! POST   /api/delivery/register                 courier sign-up (rate limited)
//! POST   /api/delivery/login                    courier sign-in (rate limited)
//! POST   /api/delivery/logout                   sign out
//! GET    /api/delivery/me                       session snapshot (partner)
//! GET    /api/delivery/profile                  courier profile (partner)
//! GET    /api/delivery/orders                   assignments (partner)
//! PUT    /api/delivery/orders/{id}/accept       claim assignment (partner)
//! PUT    /api/delivery/orders/{id}/complete     finish assignment (partner)
//! ```

pub mod auth;
pub mod categories;
pub mod coupons;
pub mod dashboard;
pub mod delivery_portal;
pub mod orders;
pub mod partners;
pub mod products;
pub mod settings;
pub mod users;
pub mod vendor_portal;
pub mod vendors;

use axum::Router;
use axum::routing::{get, post, put};

use crate::middleware::auth_rate_limiter;
use crate::state::AppState;

/// Build the complete route tree.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(catalog_routes())
        .merge(credential_routes())
        .merge(admin_routes())
        .merge(vendor_routes())
        .merge(delivery_routes())
}

fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(products::list_products))
        .route("/api/products/{id}", get(products::get_product))
        .route("/api/categories", get(categories::list_categories))
}

/// Sign-in and sign-up for all three personas, behind the per-IP
/// limiter.
fn credential_routes() -> Router<AppState> {
    Router::new()
        .route("/api/admin/login", post(auth::login))
        .route("/api/vendor/register", post(vendor_portal::register))
        .route("/api/vendor/login", post(vendor_portal::login))
        .route("/api/delivery/register", post(delivery_portal::register))
        .route("/api/delivery/login", post(delivery_portal::login))
        .layer(auth_rate_limiter())
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/api/admin/logout", post(auth::logout))
        .route("/api/admin/me", get(auth::me))
        .route("/api/admin/dashboard/stats", get(dashboard::stats))
        .route("/api/admin/users", get(users::list_users))
        .route(
            "/api/admin/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/api/admin/orders", get(orders::list_orders))
        .route("/api/admin/orders/{id}", get(orders::get_order))
        .route(
            "/api/admin/orders/{id}/status",
            put(orders::update_order_status),
        )
        .route("/api/admin/products", post(products::create_product))
        .route(
            "/api/admin/products/{id}",
            put(products::update_product).delete(products::delete_product),
        )
        .route(
            "/api/admin/products/pending",
            get(products::pending_products),
        )
        .route(
            "/api/admin/products/{id}/approve",
            put(products::approve_product),
        )
        .route("/api/admin/categories", post(categories::create_category))
        .route(
            "/api/admin/categories/{id}",
            put(categories::update_category).delete(categories::delete_category),
        )
        .route(
            "/api/admin/coupons",
            get(coupons::list_coupons).post(coupons::create_coupon),
        )
        .route(
            "/api/admin/coupons/{id}",
            put(coupons::update_coupon).delete(coupons::delete_coupon),
        )
        .route(
            "/api/admin/settings",
            get(settings::get_settings).put(settings::update_settings),
        )
        .route("/api/admin/vendors", get(vendors::list_vendors))
        .route("/api/admin/vendors/create", post(vendors::create_vendor))
        .route(
            "/api/admin/vendors/{id}",
            get(vendors::get_vendor)
                .put(vendors::update_vendor)
                .delete(vendors::delete_vendor),
        )
        .route(
            "/api/admin/vendors/{id}/categories",
            post(vendors::assign_categories),
        )
        .route(
            "/api/admin/delivery-partners",
            get(partners::list_partners),
        )
        .route(
            "/api/admin/delivery-partners/{id}",
            get(partners::get_partner)
                .put(partners::update_partner)
                .delete(partners::delete_partner),
        )
}

fn vendor_routes() -> Router<AppState> {
    Router::new()
        .route("/api/vendor/logout", post(vendor_portal::logout))
        .route("/api/vendor/me", get(vendor_portal::me))
        .route(
            "/api/vendor/profile",
            get(vendor_portal::profile).put(vendor_portal::update_profile),
        )
        .route(
            "/api/vendor/products",
            get(vendor_portal::list_products).post(vendor_portal::create_product),
        )
        .route(
            "/api/vendor/products/{id}",
            put(vendor_portal::update_product).delete(vendor_portal::delete_product),
        )
        .route("/api/vendor/dashboard/stats", get(vendor_portal::stats))
        .route("/api/vendor/orders", get(vendor_portal::list_orders))
        .route(
            "/api/vendor/orders/{id}",
            get(vendor_portal::get_order).delete(vendor_portal::delete_order),
        )
        .route(
            "/api/vendor/orders/{id}/status",
            put(vendor_portal::update_order_status),
        )
}

fn delivery_routes() -> Router<AppState> {
    Router::new()
        .route("/api/delivery/logout", post(delivery_portal::logout))
        .route("/api/delivery/me", get(delivery_portal::me))
        .route("/api/delivery/profile", get(delivery_portal::profile))
        .route("/api/delivery/orders", get(delivery_portal::list_assignments))
        .route(
            "/api/delivery/orders/{id}/accept",
            put(delivery_portal::accept_assignment),
        )
        .route(
            "/api/delivery/orders/{id}/complete",
            put(delivery_portal::complete_assignment),
        )
}
