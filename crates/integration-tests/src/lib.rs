//! Full-stack integration tests for MinuteMart.
//!
//! Each test spawns a real service on an ephemeral port with the
//! commerce API replaced by a wiremock server, then drives it over HTTP
//! with a cookie-holding client. Nothing external is required; the
//! whole suite runs with plain `cargo test`.
//!
//! # Test Categories
//!
//! - `storefront_*` - shopper-facing API (carts, checkout, accounts)
//! - `admin_*` - administrator dashboard API
//! - `vendor_delivery_*` - vendor and delivery partner portals

use std::net::SocketAddr;
use std::time::Duration;

use reqwest::Client;
use wiremock::MockServer;

/// A storefront instance wired to its own mock commerce API.
pub struct TestStorefront {
    pub base_url: String,
    pub commerce: MockServer,
    pub client: Client,
}

impl TestStorefront {
    /// Start the storefront on an ephemeral port.
    pub async fn spawn() -> Self {
        use minutemart_storefront::config::{CommerceConfig, StorefrontConfig};

        let commerce = MockServer::start().await;
        let config = StorefrontConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "test".to_string(),
            commerce: CommerceConfig {
                base_url: commerce.uri().parse().expect("mock server uri"),
                timeout: Duration::from_secs(2),
            },
            allowed_origins: Vec::new(),
            sentry_dsn: None,
        };

        let state =
            minutemart_storefront::AppState::new(config).expect("Failed to build storefront state");
        let app = minutemart_storefront::app(state);
        let base_url = serve(app).await;

        Self {
            base_url,
            commerce,
            client: cookie_client(),
        }
    }

    /// Absolute URL for a path on this instance.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// An operations-service instance wired to its own mock commerce API.
pub struct TestOps {
    pub base_url: String,
    pub commerce: MockServer,
    pub client: Client,
}

impl TestOps {
    /// Start the operations service on an ephemeral port.
    pub async fn spawn() -> Self {
        use minutemart_admin::config::{AdminConfig, CommerceConfig};

        let commerce = MockServer::start().await;
        let config = AdminConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "test".to_string(),
            commerce: CommerceConfig {
                base_url: commerce.uri().parse().expect("mock server uri"),
                timeout: Duration::from_secs(2),
            },
            allowed_origins: Vec::new(),
            sentry_dsn: None,
        };

        let state =
            minutemart_admin::AppState::new(config).expect("Failed to build operations state");
        let app = minutemart_admin::app(state);
        let base_url = serve(app).await;

        Self {
            base_url,
            commerce,
            client: cookie_client(),
        }
    }

    /// Absolute URL for a path on this instance.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Serve a router on an ephemeral loopback port, returning its base URL.
///
/// Connect info is required: the rate limiter's key extractor falls
/// back to the peer address.
async fn serve(app: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Test listener has no address");

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("Test server crashed");
    });

    format!("http://{addr}")
}

/// HTTP client that holds session cookies like a browser would.
fn cookie_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// Canned commerce API response bodies shared across test files.
pub mod fixtures {
    use serde_json::{Value, json};

    /// A product record as the commerce API serves it.
    #[must_use]
    pub fn product(id: i32, name: &str, price: f64, stock: i32) -> Value {
        json!({
            "id": id,
            "name": name,
            "description": null,
            "price": price,
            "stock": stock,
            "unit": null,
            "image_url": null,
            "category_id": 1,
            "category_name": "Grocery"
        })
    }

    /// A user record as the commerce API serves it.
    #[must_use]
    pub fn user(id: i32, email: &str, is_admin: bool) -> Value {
        json!({
            "id": id,
            "email": email,
            "full_name": "Priya Raghavan",
            "phone": null,
            "is_admin": is_admin,
            "is_verified": true
        })
    }

    /// A successful login envelope.
    #[must_use]
    pub fn login(token: &str, user: Value) -> Value {
        json!({
            "access_token": token,
            "refresh_token": "refresh-token",
            "user": user
        })
    }

    /// A saved address record.
    #[must_use]
    pub fn address(id: i32, is_default: bool) -> Value {
        json!({
            "id": id,
            "address_line1": format!("{id} MG Road"),
            "address_line2": null,
            "city": "Bengaluru",
            "state": "Karnataka",
            "postal_code": "560001",
            "country": "India",
            "is_default": is_default
        })
    }

    /// A successful coupon validation with a fixed discount.
    #[must_use]
    pub fn coupon(code: &str, discount: f64) -> Value {
        json!({
            "valid": true,
            "code": code,
            "description": "Test offer",
            "discount_type": "fixed",
            "discount_value": discount,
            "discount_amount": discount,
            "final_amount": 0.0
        })
    }

    /// A successful order placement receipt.
    #[must_use]
    pub fn receipt(order_id: i32, final_amount: f64) -> Value {
        json!({
            "message": "Order placed successfully",
            "order_id": order_id,
            "total_amount": final_amount,
            "discount_amount": 0.0,
            "final_amount": final_amount,
            "payment_method": "COD"
        })
    }
}
