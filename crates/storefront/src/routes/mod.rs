//! Route handlers and router assembly.
//!
//! # Route tree
//!
//! ```text
//! GET    /api/products                  product listing (filter/sort/page)
//! GET    /api/products/{id}             product detail
//! GET    /api/categories                category listing
//!
//! GET    /api/cart                      cart snapshot
//! DELETE /api/cart                      empty the cart
//! GET    /api/cart/count                badge count
//! POST   /api/cart/items                add product
//! PUT    /api/cart/items/{product_id}   change quantity (0 removes)
//! DELETE /api/cart/items/{product_id}   remove line
//! POST   /api/cart/coupon               apply coupon (auth)
//! DELETE /api/cart/coupon               remove coupon
//!
//! GET    /api/checkout                  quote + resolved address (auth)
//! POST   /api/orders                    place order (auth)
//! GET    /api/orders                    order history (auth)
//! GET    /api/orders/{id}               order detail (auth)
//! DELETE /api/orders/{id}               delete finished order (auth)
//!
//! GET    /api/addresses                 address book (auth)
//! POST   /api/addresses                 add address (auth)
//! PUT    /api/addresses/{id}            update address (auth)
//! DELETE /api/addresses/{id}            delete address (auth)
//! PATCH  /api/addresses/{id}/default    set default (auth)
//!
//! POST   /api/auth/register             create account        (rate limited)
//! POST   /api/auth/verify-otp           confirm signup OTP    (rate limited)
//! POST   /api/auth/resend-otp           resend OTP            (rate limited)
//! POST   /api/auth/login                sign in               (rate limited)
//! POST   /api/auth/forgot-password      start password reset  (rate limited)
//! POST   /api/auth/reset-password       finish password reset (rate limited)
//! POST   /api/auth/logout               sign out
//! GET    /api/auth/profile              profile (auth)
//! PUT    /api/auth/profile              update profile (auth)
//! DELETE /api/auth/delete-account       delete account (auth)
//! ```

pub mod addresses;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod orders;

use axum::Router;
use axum::routing::{delete, get, patch, post, put};

use crate::middleware::auth_rate_limiter;
use crate::state::AppState;

/// Build the complete route tree.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(catalog_routes())
        .merge(cart_routes())
        .merge(checkout_routes())
        .merge(order_routes())
        .merge(address_routes())
        .merge(auth_routes())
}

fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(catalog::list_products))
        .route("/api/products/{id}", get(catalog::get_product))
        .route("/api/categories", get(catalog::list_categories))
}

fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/api/cart", get(cart::show_cart).delete(cart::clear_cart))
        .route("/api/cart/count", get(cart::count))
        .route("/api/cart/items", post(cart::add_item))
        .route(
            "/api/cart/items/{product_id}",
            put(cart::update_item).delete(cart::remove_item),
        )
        .route(
            "/api/cart/coupon",
            post(cart::apply_coupon).delete(cart::remove_coupon),
        )
}

fn checkout_routes() -> Router<AppState> {
    Router::new().route("/api/checkout", get(checkout::summary))
}

fn order_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/orders",
            post(orders::place_order).get(orders::list_orders),
        )
        .route(
            "/api/orders/{id}",
            get(orders::get_order).delete(orders::delete_order),
        )
}

fn address_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/addresses",
            get(addresses::list_addresses).post(addresses::create_address),
        )
        .route(
            "/api/addresses/{id}",
            put(addresses::update_address).delete(addresses::delete_address),
        )
        .route(
            "/api/addresses/{id}/default",
            patch(addresses::set_default_address),
        )
}

fn auth_routes() -> Router<AppState> {
    // Credential endpoints sit behind the per-IP limiter; session
    // management and profile reads do not.
    let limited = Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/verify-otp", post(auth::verify_otp))
        .route("/api/auth/resend-otp", post(auth::resend_otp))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/forgot-password", post(auth::forgot_password))
        .route("/api/auth/reset-password", post(auth::reset_password))
        .layer(auth_rate_limiter());

    let open = Router::new()
        .route("/api/auth/logout", post(auth::logout))
        .route(
            "/api/auth/profile",
            get(auth::profile).put(auth::update_profile),
        )
        .route("/api/auth/delete-account", delete(auth::delete_account));

    limited.merge(open)
}
