//! Cart flows driven over HTTP: sessions, line merging, ordering, and
//! the quantity rules.

use minutemart_integration_tests::{TestStorefront, fixtures};
use reqwest::StatusCode;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

/// Serve one product from the mock commerce API.
async fn mount_product(app: &TestStorefront, id: i32, name: &str, price: f64, stock: i32) {
    Mock::given(method("GET"))
        .and(path(format!("/api/products/{id}")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(fixtures::product(id, name, price, stock)),
        )
        .mount(&app.commerce)
        .await;
}

/// Add a product to the cart and return the cart view.
async fn add_to_cart(app: &TestStorefront, product_id: i32) -> Value {
    let response = app
        .client
        .post(app.url("/api/cart/items"))
        .json(&json!({ "product_id": product_id }))
        .send()
        .await
        .expect("Failed to add to cart");
    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.expect("Failed to read cart view")
}

#[tokio::test]
async fn test_empty_cart_quotes_to_zero() {
    let app = TestStorefront::spawn().await;

    let cart: Value = app
        .client
        .get(app.url("/api/cart"))
        .send()
        .await
        .expect("Failed to fetch cart")
        .json()
        .await
        .expect("Failed to read cart view");

    assert_eq!(cart["items"], json!([]));
    assert_eq!(cart["count"], json!(0));
    assert_eq!(cart["quote"]["handling_fee"], json!(0.0));
    assert_eq!(cart["quote"]["delivery_fee"], json!(0.0));
    assert_eq!(cart["quote"]["to_pay"], json!(0.0));
}

#[tokio::test]
async fn test_adding_same_product_merges_lines() {
    let app = TestStorefront::spawn().await;
    mount_product(&app, 1, "Bananas", 48.0, 25).await;

    add_to_cart(&app, 1).await;
    let cart = add_to_cart(&app, 1).await;

    let items = cart["items"].as_array().expect("items array");
    assert_eq!(items.len(), 1, "same product must merge, not duplicate");
    assert_eq!(items[0]["quantity"], json!(2));
    assert_eq!(items[0]["line_total"], json!(96.0));
    assert_eq!(cart["count"], json!(2));
}

#[tokio::test]
async fn test_lines_keep_insertion_order() {
    let app = TestStorefront::spawn().await;
    mount_product(&app, 1, "Bananas", 48.0, 25).await;
    mount_product(&app, 2, "Milk 500ml", 30.0, 25).await;
    mount_product(&app, 3, "Bread", 42.0, 25).await;

    add_to_cart(&app, 1).await;
    add_to_cart(&app, 2).await;
    add_to_cart(&app, 3).await;

    // Bump the middle line; it must not move.
    let cart: Value = app
        .client
        .put(app.url("/api/cart/items/2"))
        .json(&json!({ "quantity": 4 }))
        .send()
        .await
        .expect("Failed to update quantity")
        .json()
        .await
        .expect("Failed to read cart view");

    let ids: Vec<i64> = cart["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|line| line["product"]["id"].as_i64().expect("product id"))
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_quantity_zero_removes_the_line() {
    let app = TestStorefront::spawn().await;
    mount_product(&app, 1, "Bananas", 48.0, 25).await;
    add_to_cart(&app, 1).await;

    let cart: Value = app
        .client
        .put(app.url("/api/cart/items/1"))
        .json(&json!({ "quantity": 0 }))
        .send()
        .await
        .expect("Failed to update quantity")
        .json()
        .await
        .expect("Failed to read cart view");

    assert_eq!(cart["items"], json!([]));
    assert_eq!(cart["count"], json!(0));
}

#[tokio::test]
async fn test_touching_an_absent_line_is_a_quiet_noop() {
    let app = TestStorefront::spawn().await;
    mount_product(&app, 1, "Bananas", 48.0, 25).await;
    add_to_cart(&app, 1).await;

    let updated: Value = app
        .client
        .put(app.url("/api/cart/items/99"))
        .json(&json!({ "quantity": 5 }))
        .send()
        .await
        .expect("Failed to update quantity")
        .json()
        .await
        .expect("Failed to read cart view");
    assert_eq!(updated["count"], json!(1), "unknown id must change nothing");

    let removed: Value = app
        .client
        .delete(app.url("/api/cart/items/99"))
        .send()
        .await
        .expect("Failed to remove line")
        .json()
        .await
        .expect("Failed to read cart view");
    assert_eq!(removed["count"], json!(1));
}

#[tokio::test]
async fn test_out_of_stock_product_is_refused() {
    let app = TestStorefront::spawn().await;
    mount_product(&app, 7, "Paneer", 90.0, 0).await;

    let response = app
        .client
        .post(app.url("/api/cart/items"))
        .json(&json!({ "product_id": 7 }))
        .send()
        .await
        .expect("Failed to call add");

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = response.json().await.expect("Failed to read error body");
    assert_eq!(body["error"], json!("Paneer is out of stock"));
}

#[tokio::test]
async fn test_count_endpoint_reports_total_quantity() {
    let app = TestStorefront::spawn().await;
    mount_product(&app, 1, "Bananas", 48.0, 25).await;
    mount_product(&app, 2, "Milk 500ml", 30.0, 25).await;

    add_to_cart(&app, 1).await;
    add_to_cart(&app, 1).await;
    add_to_cart(&app, 2).await;

    let count: Value = app
        .client
        .get(app.url("/api/cart/count"))
        .send()
        .await
        .expect("Failed to fetch count")
        .json()
        .await
        .expect("Failed to read count");
    assert_eq!(count, json!({ "count": 3 }));
}

#[tokio::test]
async fn test_carts_are_isolated_per_session() {
    let app = TestStorefront::spawn().await;
    mount_product(&app, 1, "Bananas", 48.0, 25).await;
    add_to_cart(&app, 1).await;

    // A different browser: fresh cookie jar, same server.
    let other = reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client");
    let cart: Value = other
        .get(app.url("/api/cart"))
        .send()
        .await
        .expect("Failed to fetch cart")
        .json()
        .await
        .expect("Failed to read cart view");

    assert_eq!(cart["count"], json!(0));
}

#[tokio::test]
async fn test_clearing_the_cart_empties_lines() {
    let app = TestStorefront::spawn().await;
    mount_product(&app, 1, "Bananas", 48.0, 25).await;
    add_to_cart(&app, 1).await;

    let cart: Value = app
        .client
        .delete(app.url("/api/cart"))
        .send()
        .await
        .expect("Failed to clear cart")
        .json()
        .await
        .expect("Failed to read cart view");

    assert_eq!(cart["items"], json!([]));
    assert_eq!(cart["quote"]["to_pay"], json!(0.0));
}
