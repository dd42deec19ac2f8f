//! JSON body extractor with application error rejections.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON extractor whose rejection is an [`AppError::InvalidInput`].
///
/// Entity validation is left to the domain layer; this only guarantees the
/// body decoded.
///
/// # Example
///
/// ```rust,ignore
/// use serde::Deserialize;
/// use product_api::api::extractors::JsonBody;
///
/// #[derive(Deserialize)]
/// struct CreateProductRequest {
///     name: String,
///     price: f64,
/// }
///
/// async fn create_product(JsonBody(payload): JsonBody<CreateProductRequest>) {
///     // payload decoded, not yet validated
/// }
/// ```
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::invalid_input(e.body_text()))?;

        Ok(JsonBody(value))
    }
}
