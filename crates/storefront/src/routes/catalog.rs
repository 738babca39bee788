//! Catalog routes: product listing, product detail, categories.
//!
//! Public, read-only, and served through the commerce client's short
//! catalog cache.

use axum::Json;
use axum::extract::{Path, Query, State};
use minutemart_core::{Product, ProductId};

use crate::commerce::types::{CategoryList, ProductQuery, ProductsPage};
use crate::error::Result;
use crate::state::AppState;

/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<ProductsPage>> {
    Ok(Json(state.commerce().products(&query).await?))
}

/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    Ok(Json(state.commerce().product(id).await?))
}

/// GET /api/categories
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<CategoryList>> {
    Ok(Json(state.commerce().categories().await?))
}
