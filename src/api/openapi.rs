//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{product_handler, user_handler};
use crate::domain::ProductResponse;
use crate::services::TokenResponse;
use crate::types::MessageResponse;

/// OpenAPI documentation for the Product API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product API",
        version = "0.1.0",
        description = "Product catalogue CRUD with bearer-token authentication"
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        // Product endpoints
        product_handler::create_product,
        product_handler::list_products,
        product_handler::get_product,
        product_handler::update_product,
        product_handler::delete_product,
        // User endpoints
        user_handler::create_user,
        user_handler::generate_token,
    ),
    components(
        schemas(
            ProductResponse,
            MessageResponse,
            TokenResponse,
            product_handler::CreateProductRequest,
            product_handler::UpdateProductRequest,
            user_handler::CreateUserRequest,
            user_handler::GenerateTokenRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Products", description = "Product catalogue operations"),
        (name = "Users", description = "User registration and token issuance")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /users/generate_token"))
                        .build(),
                ),
            );
        }
    }
}
