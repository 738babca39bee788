//! Checkout flows end to end: quote math, coupon lifecycle, address
//! resolution, and order placement.

use minutemart_core::OrderReceipt;
use minutemart_integration_tests::{TestStorefront, fixtures};
use reqwest::StatusCode;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

/// Sign the test client in as shopper 3.
async fn login_shopper(app: &TestStorefront) {
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::login(
            "shopper-jwt",
            fixtures::user(3, "priya@example.com", false),
        )))
        .mount(&app.commerce)
        .await;

    let response = app
        .client
        .post(app.url("/api/auth/login"))
        .json(&json!({ "email": "priya@example.com", "password": "secret" }))
        .send()
        .await
        .expect("Failed to log in");
    assert_eq!(response.status(), StatusCode::OK);
}

/// Serve a default address book with one entry.
async fn mount_default_address(app: &TestStorefront, id: i32) {
    Mock::given(method("GET"))
        .and(path("/api/addresses/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "addresses": [fixtures::address(id, true)]
        })))
        .mount(&app.commerce)
        .await;
}

/// Serve one product and add it to the cart `times` times.
async fn fill_cart(app: &TestStorefront, product_id: i32, price: f64, times: usize) {
    Mock::given(method("GET"))
        .and(path(format!("/api/products/{product_id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::product(
            product_id,
            "Staples",
            price,
            50,
        )))
        .mount(&app.commerce)
        .await;

    for _ in 0..times {
        let response = app
            .client
            .post(app.url("/api/cart/items"))
            .json(&json!({ "product_id": product_id }))
            .send()
            .await
            .expect("Failed to add to cart");
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}

/// Fetch the checkout summary.
async fn checkout_summary(app: &TestStorefront) -> Value {
    app.client
        .get(app.url("/api/checkout"))
        .send()
        .await
        .expect("Failed to fetch checkout")
        .json()
        .await
        .expect("Failed to read checkout view")
}

#[tokio::test]
async fn test_quote_over_threshold_ships_free() {
    let app = TestStorefront::spawn().await;
    login_shopper(&app).await;
    mount_default_address(&app, 2).await;
    fill_cart(&app, 1, 125.0, 2).await;

    let summary = checkout_summary(&app).await;
    let quote = &summary["quote"];
    assert_eq!(quote["subtotal"], json!(250.0));
    assert_eq!(quote["handling_fee"], json!(10.0));
    assert_eq!(quote["delivery_fee"], json!(0.0));
    assert_eq!(quote["gst"], json!(13.0), "5% of 250 rounds half away from zero");
    assert_eq!(quote["to_pay"], json!(273.0));
    assert_eq!(summary["address"]["id"], json!(2));
    assert_eq!(summary["address_source"], json!("fresh"));
}

#[tokio::test]
async fn test_quote_under_threshold_pays_delivery() {
    let app = TestStorefront::spawn().await;
    login_shopper(&app).await;
    mount_default_address(&app, 2).await;
    fill_cart(&app, 1, 60.0, 1).await;

    let quote = checkout_summary(&app).await["quote"].clone();
    assert_eq!(quote["subtotal"], json!(60.0));
    assert_eq!(quote["handling_fee"], json!(10.0));
    assert_eq!(quote["delivery_fee"], json!(40.0));
    assert_eq!(quote["gst"], json!(3.0));
    assert_eq!(quote["to_pay"], json!(113.0));
}

#[tokio::test]
async fn test_oversized_discount_floors_payable_at_zero() {
    let app = TestStorefront::spawn().await;
    login_shopper(&app).await;
    mount_default_address(&app, 2).await;
    fill_cart(&app, 1, 60.0, 1).await;

    Mock::given(method("POST"))
        .and(path("/api/coupons/validate"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(fixtures::coupon("MEGA500", 500.0)),
        )
        .mount(&app.commerce)
        .await;

    let response = app
        .client
        .post(app.url("/api/cart/coupon"))
        .json(&json!({ "code": "MEGA500" }))
        .send()
        .await
        .expect("Failed to apply coupon");
    assert_eq!(response.status(), StatusCode::OK);

    let quote = checkout_summary(&app).await["quote"].clone();
    assert_eq!(quote["discount"], json!(500.0));
    assert_eq!(quote["to_pay"], json!(0.0), "payable can never go negative");
}

#[tokio::test]
async fn test_rejected_coupon_revokes_the_previous_one() {
    let app = TestStorefront::spawn().await;
    login_shopper(&app).await;
    fill_cart(&app, 1, 125.0, 2).await;

    Mock::given(method("POST"))
        .and(path("/api/coupons/validate"))
        .and(body_partial_json(json!({ "code": "FLAT50" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::coupon("FLAT50", 50.0)))
        .mount(&app.commerce)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/coupons/validate"))
        .and(body_partial_json(json!({ "code": "BOGUS" })))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "Invalid coupon code"
        })))
        .mount(&app.commerce)
        .await;

    let applied = app
        .client
        .post(app.url("/api/cart/coupon"))
        .json(&json!({ "code": "FLAT50" }))
        .send()
        .await
        .expect("Failed to apply coupon");
    assert_eq!(applied.status(), StatusCode::OK);

    let rejected = app
        .client
        .post(app.url("/api/cart/coupon"))
        .json(&json!({ "code": "BOGUS" }))
        .send()
        .await
        .expect("Failed to call coupon apply");
    assert_eq!(rejected.status(), StatusCode::NOT_FOUND);

    let cart: Value = app
        .client
        .get(app.url("/api/cart"))
        .send()
        .await
        .expect("Failed to fetch cart")
        .json()
        .await
        .expect("Failed to read cart view");
    assert_eq!(cart["coupon"], Value::Null, "failure must revoke the old coupon");
    assert_eq!(cart["coupon_error"], json!("Invalid coupon code"));
    assert_eq!(cart["validating_coupon"], json!(false));
    assert_eq!(cart["quote"]["discount"], json!(0.0));
}

#[tokio::test]
async fn test_checkout_without_any_address_blocks_the_order() {
    let app = TestStorefront::spawn().await;
    login_shopper(&app).await;
    fill_cart(&app, 1, 125.0, 1).await;

    Mock::given(method("GET"))
        .and(path("/api/addresses/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "addresses": [] })))
        .mount(&app.commerce)
        .await;

    let summary = checkout_summary(&app).await;
    assert_eq!(summary["address"], Value::Null);

    let response = app
        .client
        .post(app.url("/api/orders"))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to call place order");
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = response.json().await.expect("Failed to read error body");
    assert_eq!(body["error"], json!("Add a delivery address to continue"));
}

#[tokio::test]
async fn test_placed_order_sends_the_code_and_clears_the_cart() {
    let app = TestStorefront::spawn().await;
    login_shopper(&app).await;
    mount_default_address(&app, 2).await;
    fill_cart(&app, 1, 125.0, 2).await;

    Mock::given(method("POST"))
        .and(path("/api/coupons/validate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::coupon("FLAT50", 50.0)))
        .mount(&app.commerce)
        .await;
    app.client
        .post(app.url("/api/cart/coupon"))
        .json(&json!({ "code": "FLAT50" }))
        .send()
        .await
        .expect("Failed to apply coupon");

    // The coupon rides along as a code; no amounts are trusted from the
    // client side of the order.
    Mock::given(method("POST"))
        .and(path("/api/orders/"))
        .and(body_json(json!({ "address_id": 2, "coupon_code": "FLAT50" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(fixtures::receipt(31, 223.0)))
        .mount(&app.commerce)
        .await;

    let response = app
        .client
        .post(app.url("/api/orders"))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to place order");
    assert_eq!(response.status(), StatusCode::CREATED);
    let receipt: OrderReceipt = response.json().await.expect("Failed to read receipt");
    assert_eq!(receipt.order_id.as_i32(), 31);

    let order_request = app
        .commerce
        .received_requests()
        .await
        .expect("Failed to read recorded requests")
        .into_iter()
        .find(|request| request.url.path() == "/api/orders/")
        .expect("order request was recorded");
    assert!(
        order_request.headers.contains_key("idempotency-key"),
        "placement must carry an idempotency key"
    );

    let cart: Value = app
        .client
        .get(app.url("/api/cart"))
        .send()
        .await
        .expect("Failed to fetch cart")
        .json()
        .await
        .expect("Failed to read cart view");
    assert_eq!(cart["count"], json!(0), "success must clear the cart");
    assert_eq!(cart["coupon"], Value::Null);
}

#[tokio::test]
async fn test_failed_order_leaves_the_cart_intact() {
    let app = TestStorefront::spawn().await;
    login_shopper(&app).await;
    mount_default_address(&app, 2).await;
    fill_cart(&app, 1, 125.0, 2).await;

    Mock::given(method("POST"))
        .and(path("/api/orders/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "Insufficient stock for Staples"
        })))
        .mount(&app.commerce)
        .await;

    let response = app
        .client
        .post(app.url("/api/orders"))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to call place order");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to read error body");
    assert_eq!(body["error"], json!("Insufficient stock for Staples"));

    let cart: Value = app
        .client
        .get(app.url("/api/cart"))
        .send()
        .await
        .expect("Failed to fetch cart")
        .json()
        .await
        .expect("Failed to read cart view");
    assert_eq!(cart["count"], json!(2), "failure must preserve the cart");
}

#[tokio::test]
async fn test_cached_address_survives_a_backend_outage() {
    let app = TestStorefront::spawn().await;
    login_shopper(&app).await;
    fill_cart(&app, 1, 125.0, 2).await;

    // First resolution succeeds and primes the session cache; every
    // later fetch fails.
    Mock::given(method("GET"))
        .and(path("/api/addresses/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "addresses": [fixtures::address(4, true)]
        })))
        .up_to_n_times(1)
        .mount(&app.commerce)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/addresses/"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "database unavailable"
        })))
        .mount(&app.commerce)
        .await;

    let fresh = checkout_summary(&app).await;
    assert_eq!(fresh["address_source"], json!("fresh"));

    let cached = checkout_summary(&app).await;
    assert_eq!(cached["address"]["id"], json!(4));
    assert_eq!(cached["address_source"], json!("cached"));
}
