//! Product handlers.

use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::extractors::{JsonBody, PathParams, QueryParams};
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{EntityId, ProductResponse};
use crate::errors::AppResult;
use crate::types::{ListParams, ListQuery, MessageResponse};

/// Product creation request
///
/// Missing fields decode to empty/zero and are rejected by validation.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    /// Product name (required)
    #[serde(default)]
    #[schema(example = "Notebook")]
    pub name: String,
    /// Unit price, strictly positive
    #[serde(default)]
    #[schema(example = 100.0)]
    pub price: f64,
}

/// Product update request, replaces name and price
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    /// New product name (required)
    #[serde(default)]
    #[schema(example = "Notebook 2")]
    pub name: String,
    /// New unit price, strictly positive
    #[serde(default)]
    #[schema(example = 120.0)]
    pub price: f64,
}

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// Create a product
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    security(("bearer_auth" = [])),
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created"),
        (status = 400, description = "Invalid input or validation error", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = MessageResponse),
        (status = 500, description = "Storage error", body = MessageResponse)
    )
)]
pub async fn create_product(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateProductRequest>,
) -> AppResult<StatusCode> {
    let product = state
        .product_service
        .create_product(payload.name, payload.price)
        .await?;

    tracing::debug!(product_id = %product.id, user_id = %current_user.id, "Create request served");
    Ok(StatusCode::CREATED)
}

/// List products
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    security(("bearer_auth" = [])),
    params(ListParams),
    responses(
        (status = 200, description = "Products in creation order", body = Vec<ProductResponse>),
        (status = 401, description = "Unauthorized", body = MessageResponse),
        (status = 500, description = "Storage error", body = MessageResponse)
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ListParams>,
) -> AppResult<Json<Vec<ProductResponse>>> {
    let query = ListQuery::from(params);
    let products = state.product_service.list_products(&query).await?;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// Get product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product", body = ProductResponse),
        (status = 400, description = "Malformed ID", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = MessageResponse),
        (status = 404, description = "Product not found", body = MessageResponse)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    PathParams(id): PathParams<String>,
) -> AppResult<Json<ProductResponse>> {
    let id = EntityId::parse(&id)?;
    let product = state.product_service.get_product(id).await?;

    Ok(Json(ProductResponse::from(product)))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Products",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated"),
        (status = 400, description = "Malformed ID, invalid input or validation error", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = MessageResponse),
        (status = 404, description = "Product not found", body = MessageResponse),
        (status = 500, description = "Storage error", body = MessageResponse)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    PathParams(id): PathParams<String>,
    JsonBody(payload): JsonBody<UpdateProductRequest>,
) -> AppResult<StatusCode> {
    let id = EntityId::parse(&id)?;
    state
        .product_service
        .update_product(id, payload.name, payload.price)
        .await?;

    Ok(StatusCode::OK)
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Products",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 400, description = "Malformed ID", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = MessageResponse),
        (status = 404, description = "Product not found", body = MessageResponse),
        (status = 500, description = "Storage error", body = MessageResponse)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    PathParams(id): PathParams<String>,
) -> AppResult<StatusCode> {
    let id = EntityId::parse(&id)?;
    state.product_service.delete_product(id).await?;

    Ok(StatusCode::OK)
}
