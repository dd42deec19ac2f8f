//! Integration tests for API endpoints.
//!
//! The full router runs over an in-memory SQLite database; requests are
//! driven with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use product_api::api::{create_router, AppState};
use product_api::config::Config;
use product_api::domain::{EntityId, Product};
use product_api::errors::{AppError, AppResult};
use product_api::infra::Database;
use product_api::services::{ProductService, ServiceContainer, Services};
use product_api::types::ListQuery;

const SECRET: &str = "test-secret-key-for-testing-only-32chars";

// =============================================================================
// Test Helpers
// =============================================================================

fn test_config() -> Config {
    let mut config = Config::new("sqlite::memory:", SECRET).unwrap();
    config.database_max_connections = 1;
    config
}

async fn test_database(config: &Config) -> Arc<Database> {
    Arc::new(Database::connect(config).await.unwrap())
}

async fn test_app() -> Router {
    let config = test_config();
    let database = test_database(&config).await;
    create_router(AppState::from_config(database, config))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    read(app, request).await
}

async fn read(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

/// Register a user and exchange the credentials for a token.
async fn login(app: &Router) -> String {
    let (status, _) = send(
        app,
        Method::POST,
        "/users",
        None,
        Some(json!({"name": "John", "email": "j@j.com", "password": "123456"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        app,
        Method::POST,
        "/users/generate_token",
        None,
        Some(json!({"email": "j@j.com", "password": "123456"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["access_token"].as_str().unwrap().to_string()
}

async fn create_product(app: &Router, token: &str, name: &str, price: f64) {
    let (status, _) = send(
        app,
        Method::POST,
        "/products",
        Some(token),
        Some(json!({"name": name, "price": price})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

async fn list(app: &Router, token: &str, uri: &str) -> Vec<Value> {
    let (status, body) = send(app, Method::GET, uri, Some(token), None).await;
    assert_eq!(status, StatusCode::OK);
    body.as_array().unwrap().clone()
}

// =============================================================================
// Infrastructure Endpoints
// =============================================================================

#[tokio::test]
async fn test_health_reports_database() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_document_lists_product_paths() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/products").is_some());
    assert!(body["paths"].get("/products/{id}").is_some());
    assert!(body["paths"].get("/users/generate_token").is_some());
}

// =============================================================================
// Product Endpoints
// =============================================================================

#[tokio::test]
async fn test_create_product_flow() {
    let app = test_app().await;
    let token = login(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/products",
        Some(&token),
        Some(json!({"name": "", "price": 10})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "name is required");

    let (status, body) = send(
        &app,
        Method::POST,
        "/products",
        Some(&token),
        Some(json!({"name": "Product 1", "price": 10})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body.is_null());

    let products = list(&app, &token, "/products").await;
    assert_eq!(products.len(), 1);
    let id = products[0]["id"].as_str().unwrap().to_string();

    let (status, body) = send(&app, Method::GET, &format!("/products/{}", id), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id.as_str());
    assert_eq!(body["name"], "Product 1");
    assert_eq!(body["price"].as_f64(), Some(10.0));
}

#[tokio::test]
async fn test_create_product_price_rules() {
    let app = test_app().await;
    let token = login(&app).await;

    let cases = [
        (json!({"name": "Product 1", "price": 0}), "price is required"),
        (json!({"name": "Product 1"}), "price is required"),
        (json!({"name": "Product 1", "price": -5}), "invalid price"),
        (json!({"price": 10}), "name is required"),
    ];

    for (payload, message) in cases {
        let (status, body) = send(&app, Method::POST, "/products", Some(&token), Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], message);
    }

    assert!(list(&app, &token, "/products").await.is_empty());
}

#[tokio::test]
async fn test_get_product_errors() {
    let app = test_app().await;
    let token = login(&app).await;

    let (status, body) = send(&app, Method::GET, "/products/not-an-id", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid identifier");

    let missing = format!("/products/{}", EntityId::generate());
    let (status, body) = send(&app, Method::GET, &missing, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Resource not found");
}

#[tokio::test]
async fn test_update_product_flow() {
    let app = test_app().await;
    let token = login(&app).await;
    create_product(&app, &token, "Product 1", 10.0).await;
    let id = list(&app, &token, "/products").await[0]["id"]
        .as_str()
        .unwrap()
        .to_string();
    let uri = format!("/products/{}", id);

    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(&token),
        Some(json!({"name": "Product 1 v2", "price": 20.5})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());

    let (_, body) = send(&app, Method::GET, &uri, Some(&token), None).await;
    assert_eq!(body["name"], "Product 1 v2");
    assert_eq!(body["price"].as_f64(), Some(20.5));

    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(&token),
        Some(json!({"name": "Product 1 v3", "price": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "price is required");

    let missing = format!("/products/{}", EntityId::generate());
    let (status, _) = send(
        &app,
        Method::PUT,
        &missing,
        Some(&token),
        Some(json!({"name": "Ghost", "price": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_product_flow() {
    let app = test_app().await;
    let token = login(&app).await;
    create_product(&app, &token, "Product 1", 10.0).await;
    let id = list(&app, &token, "/products").await[0]["id"]
        .as_str()
        .unwrap()
        .to_string();
    let uri = format!("/products/{}", id);

    let (status, body) = send(&app, Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());

    let (status, _) = send(&app, Method::GET, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_products_pagination() {
    let app = test_app().await;
    let token = login(&app).await;
    for i in 1..=5 {
        create_product(&app, &token, &format!("Product {}", i), i as f64).await;
    }

    assert_eq!(list(&app, &token, "/products").await.len(), 5);
    assert_eq!(list(&app, &token, "/products?page=1&limit=2").await.len(), 2);
    assert_eq!(list(&app, &token, "/products?page=3&limit=2").await.len(), 1);
    assert!(list(&app, &token, "/products?page=4&limit=2").await.is_empty());

    // Non-integer values mean "no pagination"
    assert_eq!(list(&app, &token, "/products?page=abc&limit=2").await.len(), 5);
    assert_eq!(list(&app, &token, "/products?page=1&limit=0").await.len(), 5);

    let ascending = list(&app, &token, "/products").await;
    let mut descending = list(&app, &token, "/products?sort=desc").await;
    descending.reverse();
    assert_eq!(ascending, descending);
}

#[tokio::test]
async fn test_list_page_far_beyond_the_end() {
    let app = test_app().await;
    let token = login(&app).await;
    for i in 1..=5 {
        create_product(&app, &token, &format!("Product {}", i), i as f64).await;
    }

    let uris = [
        format!("/products?page={}&limit=10", i64::MAX),
        format!("/products?page={}&limit=10&sort=desc", i64::MAX),
        format!("/products?page={}&limit={}", i64::MAX, i64::MAX),
        "/products?page=922337203685477580&limit=10".to_string(),
    ];
    for uri in &uris {
        assert!(list(&app, &token, uri).await.is_empty(), "{}", uri);
    }
}

// =============================================================================
// Request Decoding
// =============================================================================

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = test_app().await;
    let token = login(&app).await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/products")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": \"Product 1\", \"price\":"))
        .unwrap();
    let (status, body) = read(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().starts_with("Invalid input"));

    let (status, _) = send(
        &app,
        Method::POST,
        "/products",
        Some(&token),
        Some(json!({"name": "Product 1", "price": "ten"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_undecodable_path_and_query_use_message_body() {
    let app = test_app().await;
    let token = login(&app).await;

    // Percent-encoded bytes that are not UTF-8
    for method in [Method::GET, Method::DELETE] {
        let (status, body) = send(&app, method, "/products/%FF%FE", Some(&token), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().starts_with("Invalid input"));
    }

    let (status, body) = send(&app, Method::GET, "/products?page=1&page=2", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().starts_with("Invalid input"));
}

#[tokio::test]
async fn test_missing_content_type_is_bad_request() {
    let app = test_app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/users")
        .body(Body::from(
            json!({"name": "John", "email": "j@j.com", "password": "123456"}).to_string(),
        ))
        .unwrap();
    let (status, body) = read(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn test_product_routes_require_token() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/products", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Authentication required");

    let (status, _) = send(&app, Method::GET, "/products", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let request = Request::builder()
        .uri("/products")
        .header(header::AUTHORIZATION, "Basic am9objoxMjM0NTY=")
        .body(Body::empty())
        .unwrap();
    let (status, _) = read(&app, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_generate_token_credentials() {
    let app = test_app().await;
    let token = login(&app).await;
    assert!(!token.is_empty());

    let (status, body) = send(
        &app,
        Method::POST,
        "/users/generate_token",
        None,
        Some(json!({"email": "j@j.com", "password": "123456"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["expires_in"], 300);

    let (wrong_status, wrong_body) = send(
        &app,
        Method::POST,
        "/users/generate_token",
        None,
        Some(json!({"email": "j@j.com", "password": "1234567"})),
    )
    .await;
    let (unknown_status, unknown_body) = send(
        &app,
        Method::POST,
        "/users/generate_token",
        None,
        Some(json!({"email": "nobody@j.com", "password": "123456"})),
    )
    .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body, unknown_body);
}

#[tokio::test]
async fn test_create_user_validation() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        None,
        Some(json!({"name": "John", "password": "123456"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "email is required");

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        None,
        Some(json!({"name": "John", "email": "j@j.com", "password": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "password is required");
}

#[tokio::test]
async fn test_duplicate_email_is_storage_error() {
    let app = test_app().await;
    login(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        None,
        Some(json!({"name": "Jane", "email": "j@j.com", "password": "abcdef"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "A database error occurred");
}

// =============================================================================
// Storage Failures
// =============================================================================

/// Product service whose store is unreachable
struct UnavailableProducts;

#[async_trait]
impl ProductService for UnavailableProducts {
    async fn create_product(&self, _name: String, _price: f64) -> AppResult<Product> {
        Err(unavailable())
    }

    async fn get_product(&self, _id: EntityId) -> AppResult<Product> {
        Err(unavailable())
    }

    async fn list_products(&self, _query: &ListQuery) -> AppResult<Vec<Product>> {
        Err(unavailable())
    }

    async fn update_product(&self, _id: EntityId, _name: String, _price: f64) -> AppResult<Product> {
        Err(unavailable())
    }

    async fn delete_product(&self, _id: EntityId) -> AppResult<()> {
        Err(unavailable())
    }
}

fn unavailable() -> AppError {
    AppError::Database(sea_orm::DbErr::Custom("connection refused on 10.0.0.7".into()))
}

#[tokio::test]
async fn test_storage_failure_hides_details() {
    let config = test_config();
    let database = test_database(&config).await;
    let real = Services::from_connection(database.get_connection(), config);
    let services = Services::new(Arc::new(UnavailableProducts), real.users(), real.auth());
    let app = create_router(AppState::from_container(&services, database));
    let token = login(&app).await;

    let (status, body) = send(&app, Method::GET, "/products", Some(&token), None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"message": "A database error occurred"}));

    let (status, _) = send(
        &app,
        Method::POST,
        "/products",
        Some(&token),
        Some(json!({"name": "Product 1", "price": 10})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
