use axum::{
    Json, async_trait,
    extract::{FromRequest, Request},
};
use serde_json::Value;

use crate::api::error::ApiError;

/// Extracts the create-expense body as raw JSON so validation can echo the
/// received input back on failure.
pub struct ExpenseInput(pub Value);

#[async_trait]
impl<S> FromRequest<S> for ExpenseInput
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| ApiError::invalid_format(format!("Failed to parse JSON body: {}", e)))?;

        if !value.is_object() {
            return Err(ApiError::invalid_format("Request body must be a JSON object"));
        }

        Ok(ExpenseInput(value))
    }
}
