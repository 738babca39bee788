//! Vendor and delivery partner portals: registration, the approval
//! gate, scoped product lists, and the courier assignment queue.

use minutemart_integration_tests::TestOps;
use reqwest::StatusCode;
use serde_json::{Value, json};
use wiremock::matchers::{bearer_token, body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn vendor_login_body(token: &str) -> Value {
    json!({
        "access_token": token,
        "vendor": {
            "id": 4,
            "user_id": 19,
            "email": "greens@example.com",
            "business_name": "Fresh Greens Pvt Ltd",
            "full_name": "R. Iyer"
        }
    })
}

fn partner_login_body(token: &str) -> Value {
    json!({
        "access_token": token,
        "partner": {
            "id": 2,
            "full_name": "K. Sharma",
            "phone": "+91 98450 12345"
        }
    })
}

/// Sign the test client in as vendor 4.
async fn login_vendor(app: &TestOps) {
    Mock::given(method("POST"))
        .and(path("/api/vendor/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vendor_login_body("vendor-jwt")))
        .mount(&app.commerce)
        .await;

    let response = app
        .client
        .post(app.url("/api/vendor/login"))
        .json(&json!({ "email": "greens@example.com", "password": "secret" }))
        .send()
        .await
        .expect("Failed to log in vendor");
    assert_eq!(response.status(), StatusCode::OK);
}

/// Sign the test client in as delivery partner 2.
async fn login_partner(app: &TestOps) {
    Mock::given(method("POST"))
        .and(path("/api/delivery/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(partner_login_body("courier-jwt")))
        .mount(&app.commerce)
        .await;

    let response = app
        .client
        .post(app.url("/api/delivery/login"))
        .json(&json!({ "email": "sharma@example.com", "password": "secret" }))
        .send()
        .await
        .expect("Failed to log in partner");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_vendor_registration_lands_in_the_approval_queue() {
    let app = TestOps::spawn().await;
    Mock::given(method("POST"))
        .and(path("/api/vendor/register"))
        .and(body_json(json!({
            "email": "greens@example.com",
            "password": "secret",
            "business_name": "Fresh Greens Pvt Ltd"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Registration submitted for approval"
        })))
        .mount(&app.commerce)
        .await;

    let response = app
        .client
        .post(app.url("/api/vendor/register"))
        .json(&json!({
            "email": "greens@example.com",
            "password": "secret",
            "business_name": "Fresh Greens Pvt Ltd"
        }))
        .send()
        .await
        .expect("Failed to register");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.expect("Failed to read body");
    assert_eq!(body["message"], json!("Registration submitted for approval"));
}

#[tokio::test]
async fn test_pending_vendor_cannot_log_in() {
    let app = TestOps::spawn().await;
    Mock::given(method("POST"))
        .and(path("/api/vendor/login"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": "Vendor account pending approval"
        })))
        .mount(&app.commerce)
        .await;

    let response = app
        .client
        .post(app.url("/api/vendor/login"))
        .json(&json!({ "email": "greens@example.com", "password": "secret" }))
        .send()
        .await
        .expect("Failed to call login");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.expect("Failed to read error body");
    assert_eq!(body["error"], json!("Vendor account pending approval"));

    let me = app
        .client
        .get(app.url("/api/vendor/me"))
        .send()
        .await
        .expect("Failed to call me");
    assert_eq!(me.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_vendor_login_keeps_the_token_server_side() {
    let app = TestOps::spawn().await;
    login_vendor(&app).await;

    let me: Value = app
        .client
        .get(app.url("/api/vendor/me"))
        .send()
        .await
        .expect("Failed to call me")
        .json()
        .await
        .expect("Failed to read me");
    assert_eq!(me["business_name"], json!("Fresh Greens Pvt Ltd"));
    assert!(
        !me.to_string().contains("vendor-jwt"),
        "the bearer token must never reach the browser"
    );

    // The stored token rides outbound calls.
    Mock::given(method("GET"))
        .and(path("/api/vendor/products"))
        .and(bearer_token("vendor-jwt"))
        .and(query_param("search", "paneer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [{ "id": 7, "name": "Paneer 200g" }],
            "total": 1
        })))
        .mount(&app.commerce)
        .await;

    let page: Value = app
        .client
        .get(app.url("/api/vendor/products?search=paneer"))
        .send()
        .await
        .expect("Failed to list products")
        .json()
        .await
        .expect("Failed to read page");
    assert_eq!(page["products"][0]["name"], json!("Paneer 200g"));
}

#[tokio::test]
async fn test_vendor_order_status_update_passes_through() {
    let app = TestOps::spawn().await;
    login_vendor(&app).await;

    Mock::given(method("PUT"))
        .and(path("/api/vendor/orders/9/status"))
        .and(bearer_token("vendor-jwt"))
        .and(body_json(json!({ "status": "Packed" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Order status updated"
        })))
        .mount(&app.commerce)
        .await;

    let response = app
        .client
        .put(app.url("/api/vendor/orders/9/status"))
        .json(&json!({ "status": "Packed" }))
        .send()
        .await
        .expect("Failed to update status");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_courier_works_the_assignment_queue() {
    let app = TestOps::spawn().await;

    Mock::given(method("POST"))
        .and(path("/api/delivery/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Registration submitted for verification"
        })))
        .mount(&app.commerce)
        .await;
    let registered = app
        .client
        .post(app.url("/api/delivery/register"))
        .json(&json!({
            "email": "sharma@example.com",
            "password": "secret",
            "full_name": "K. Sharma"
        }))
        .send()
        .await
        .expect("Failed to register");
    assert_eq!(registered.status(), StatusCode::CREATED);

    login_partner(&app).await;

    let me: Value = app
        .client
        .get(app.url("/api/delivery/me"))
        .send()
        .await
        .expect("Failed to call me")
        .json()
        .await
        .expect("Failed to read me");
    assert_eq!(me["full_name"], json!("K. Sharma"));

    Mock::given(method("GET"))
        .and(path("/api/delivery/orders"))
        .and(bearer_token("courier-jwt"))
        .and(query_param("status", "available"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "orders": [{ "id": 14, "status": "Ready" }]
        })))
        .mount(&app.commerce)
        .await;
    let queue: Value = app
        .client
        .get(app.url("/api/delivery/orders?status=available"))
        .send()
        .await
        .expect("Failed to list assignments")
        .json()
        .await
        .expect("Failed to read queue");
    assert_eq!(queue["orders"][0]["id"], json!(14));

    Mock::given(method("PUT"))
        .and(path("/api/delivery/orders/14/accept"))
        .and(bearer_token("courier-jwt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Order accepted"
        })))
        .mount(&app.commerce)
        .await;
    let accepted = app
        .client
        .put(app.url("/api/delivery/orders/14/accept"))
        .send()
        .await
        .expect("Failed to accept");
    assert_eq!(accepted.status(), StatusCode::OK);

    Mock::given(method("PUT"))
        .and(path("/api/delivery/orders/14/complete"))
        .and(bearer_token("courier-jwt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Order delivered"
        })))
        .mount(&app.commerce)
        .await;
    let completed = app
        .client
        .put(app.url("/api/delivery/orders/14/complete"))
        .send()
        .await
        .expect("Failed to complete");
    assert_eq!(completed.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_courier_session_cannot_reach_the_vendor_portal() {
    let app = TestOps::spawn().await;
    login_partner(&app).await;

    let response = app
        .client
        .get(app.url("/api/vendor/orders"))
        .send()
        .await
        .expect("Failed to call vendor orders");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.expect("Failed to read error body");
    assert_eq!(body["error"], json!("Vendor login required"));

    // Probing the wrong portal must not sign the courier out.
    let me = app
        .client
        .get(app.url("/api/delivery/me"))
        .send()
        .await
        .expect("Failed to call me");
    assert_eq!(me.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_vendor_session_cannot_reach_the_admin_dashboard() {
    let app = TestOps::spawn().await;
    login_vendor(&app).await;

    let response = app
        .client
        .get(app.url("/api/admin/users"))
        .send()
        .await
        .expect("Failed to call admin users");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.expect("Failed to read error body");
    assert_eq!(body["error"], json!("Administrator login required"));

    let me = app
        .client
        .get(app.url("/api/vendor/me"))
        .send()
        .await
        .expect("Failed to call me");
    assert_eq!(me.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_vendor_logout_ends_only_their_session() {
    let app = TestOps::spawn().await;
    login_vendor(&app).await;
    login_partner(&app).await;

    let logout = app
        .client
        .post(app.url("/api/vendor/logout"))
        .send()
        .await
        .expect("Failed to log out");
    assert_eq!(logout.status(), StatusCode::OK);

    let me = app
        .client
        .get(app.url("/api/vendor/me"))
        .send()
        .await
        .expect("Failed to call me");
    assert_eq!(me.status(), StatusCode::UNAUTHORIZED);
    let body: Value = me.json().await.expect("Failed to read error body");
    assert_eq!(body["error"], json!("Vendor login required"));

    // The courier identity in the same browser session is untouched.
    let partner_me: Value = app
        .client
        .get(app.url("/api/delivery/me"))
        .send()
        .await
        .expect("Failed to call partner me")
        .json()
        .await
        .expect("Failed to read partner me");
    assert_eq!(partner_me["full_name"], json!("K. Sharma"));
}
