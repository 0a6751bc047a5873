use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use service::catalog::{NewProduct, ProductFilter, ProductPatch};

use crate::errors::JsonApiError;
use crate::observability;
use crate::state::ServerState;

#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    pub id: Option<Uuid>,
    pub slug: Option<String>,
    pub category: Option<String>,
    pub featured: Option<String>,
}

/// Read selector: `id` and `slug` return a single product, otherwise the
/// category/featured filters apply (`category=all` means no filter).
#[utoipa::path(get, path = "/api/products", tag = "products",
    params(
        ("id" = Option<Uuid>, Query, description = "Fetch one product by id"),
        ("slug" = Option<String>, Query, description = "Fetch one product by slug"),
        ("category" = Option<String>, Query, description = "Case-insensitive category filter"),
        ("featured" = Option<String>, Query, description = "Pass 'true' to restrict to featured products"),
    ),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn get_products(
    State(state): State<ServerState>,
    Query(q): Query<ProductsQuery>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    observability::PRODUCT_READS_TOTAL.inc();

    if let Some(id) = q.id {
        let product = state.catalog.get_by_id(id).await?;
        return Ok(Json(json!({ "product": product })));
    }
    if let Some(slug) = &q.slug {
        let product = state.catalog.get_by_slug(slug).await?;
        return Ok(Json(json!({ "product": product })));
    }

    let filter = ProductFilter {
        category: q.category.filter(|c| c != "all"),
        featured_only: q.featured.as_deref() == Some("true"),
    };
    let products = state.catalog.list(&filter).await?;
    Ok(Json(json!({ "products": products })))
}

#[utoipa::path(post, path = "/api/products", tag = "products",
    request_body = crate::openapi::NewProductDoc,
    responses((status = 201, description = "Created"), (status = 400, description = "Validation Error")))]
pub async fn create_product(
    State(state): State<ServerState>,
    Json(input): Json<NewProduct>,
) -> Result<(StatusCode, Json<serde_json::Value>), JsonApiError> {
    observability::PRODUCT_WRITES_TOTAL.inc();
    let product = state.catalog.create(input).await?;
    Ok((StatusCode::CREATED, Json(json!({ "success": true, "product": product }))))
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub id: Uuid,
    #[serde(flatten)]
    pub patch: ProductPatch,
}

#[utoipa::path(patch, path = "/api/products", tag = "products",
    request_body = crate::openapi::UpdateProductDoc,
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn update_product(
    State(state): State<ServerState>,
    Json(req): Json<UpdateProductRequest>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    observability::PRODUCT_WRITES_TOTAL.inc();
    let product = state.catalog.update(req.id, req.patch).await?;
    Ok(Json(json!({ "success": true, "product": product })))
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub id: Option<Uuid>,
}

#[utoipa::path(delete, path = "/api/products", tag = "products",
    params(("id" = Option<Uuid>, Query, description = "Product id to delete")),
    responses((status = 200, description = "OK"), (status = 400, description = "Missing id"), (status = 404, description = "Not Found")))]
pub async fn delete_product(
    State(state): State<ServerState>,
    Query(q): Query<DeleteQuery>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    observability::PRODUCT_WRITES_TOTAL.inc();
    let id = q
        .id
        .ok_or_else(|| JsonApiError::new(StatusCode::BAD_REQUEST, "Product ID required"))?;
    state.catalog.delete(id).await?;
    Ok(Json(json!({ "success": true })))
}
