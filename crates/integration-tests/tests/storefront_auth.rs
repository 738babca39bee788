//! Account flows: registration, login, session expiry, and logout.
//!
//! The contract under test: the bearer token never appears in any
//! storefront response, and a backend 401 ends the session so the SPA
//! can re-authenticate.

use minutemart_integration_tests::{TestStorefront, fixtures};
use reqwest::StatusCode;
use serde_json::{Value, json};
use wiremock::matchers::{bearer_token, method, path};
use wiremock::{Mock, ResponseTemplate};

async fn login_shopper(app: &TestStorefront) -> Value {
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
    response.json().await.expect("Failed to read login view")
}

#[tokio::test]
async fn test_register_proxies_the_backend_acknowledgement() {
    let app = TestStorefront::spawn().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Registration successful. Please verify your email.",
            "user_id": 7
        })))
        .mount(&app.commerce)
        .await;

    let response = app
        .client
        .post(app.url("/api/auth/register"))
        .json(&json!({
            "email": "new@example.com",
            "password": "secret",
            "full_name": "New Shopper"
        }))
        .send()
        .await
        .expect("Failed to register");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.expect("Failed to read body");
    assert_eq!(body["user_id"], json!(7));
}

#[tokio::test]
async fn test_login_keeps_the_token_server_side() {
    let app = TestStorefront::spawn().await;
    let view = login_shopper(&app).await;

    assert_eq!(view["message"], json!("Logged in successfully"));
    assert_eq!(view["user"]["email"], json!("priya@example.com"));
    assert!(
        !view.to_string().contains("shopper-jwt"),
        "the bearer token must never reach the browser"
    );

    // The session now authenticates backend calls with the stored token.
    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .and(bearer_token("shopper-jwt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": fixtures::user(3, "priya@example.com", false)
        })))
        .mount(&app.commerce)
        .await;

    let profile = app
        .client
        .get(app.url("/api/auth/profile"))
        .send()
        .await
        .expect("Failed to fetch profile");
    assert_eq!(profile.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_profile_requires_a_session() {
    let app = TestStorefront::spawn().await;

    let response = app
        .client
        .get(app.url("/api/auth/profile"))
        .send()
        .await
        .expect("Failed to call profile");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.expect("Failed to read error body");
    assert_eq!(body["error"], json!("Login required"));
}

#[tokio::test]
async fn test_expired_token_ends_the_session() {
    let app = TestStorefront::spawn().await;
    login_shopper(&app).await;

    // The backend rejects the stored token exactly once; the second
    // profile call must be refused locally without touching the wire.
    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "msg": "Token has expired"
        })))
        .expect(1)
        .mount(&app.commerce)
        .await;

    let first = app
        .client
        .get(app.url("/api/auth/profile"))
        .send()
        .await
        .expect("Failed to call profile");
    assert_eq!(first.status(), StatusCode::UNAUTHORIZED);

    let second = app
        .client
        .get(app.url("/api/auth/profile"))
        .send()
        .await
        .expect("Failed to call profile again");
    assert_eq!(second.status(), StatusCode::UNAUTHORIZED);
    let body: Value = second.json().await.expect("Failed to read error body");
    assert_eq!(body["error"], json!("Login required"));
}

#[tokio::test]
async fn test_logout_drops_auth_but_keeps_the_cart() {
    let app = TestStorefront::spawn().await;
    login_shopper(&app).await;

    Mock::given(method("GET"))
        .and(path("/api/products/1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(fixtures::product(1, "Bananas", 48.0, 25)),
        )
        .mount(&app.commerce)
        .await;
    let added = app
        .client
        .post(app.url("/api/cart/items"))
        .json(&json!({ "product_id": 1 }))
        .send()
        .await
        .expect("Failed to add to cart");
    assert_eq!(added.status(), StatusCode::CREATED);

    let logout = app
        .client
        .post(app.url("/api/auth/logout"))
        .send()
        .await
        .expect("Failed to log out");
    assert_eq!(logout.status(), StatusCode::OK);

    let profile = app
        .client
        .get(app.url("/api/auth/profile"))
        .send()
        .await
        .expect("Failed to call profile");
    assert_eq!(profile.status(), StatusCode::UNAUTHORIZED);

    let cart: Value = app
        .client
        .get(app.url("/api/cart"))
        .send()
        .await
        .expect("Failed to fetch cart")
        .json()
        .await
        .expect("Failed to read cart view");
    assert_eq!(cart["count"], json!(1), "an anonymous cart outlives the login");
}
