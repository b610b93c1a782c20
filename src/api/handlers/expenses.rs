use axum::{Json, extract::State, http::Method};
use hyper::StatusCode;
use serde::Serialize;

use crate::{
    api::{error::ApiError, extractors::ExpenseInput, validation::validate_new_expense},
    expenses::models::Expense,
    utils::app_config::AppConfig,
};

/// Response body for a successful creation.
#[derive(Serialize)]
pub struct CreatedExpense {
    pub message: String,
    pub expense: Expense,
}

// GET /api/expenses
//
// The frontend expects the array directly, so no envelope.
pub async fn list_expenses(
    State(app_config): State<AppConfig>,
) -> (StatusCode, Json<Vec<Expense>>) {
    (StatusCode::OK, Json(app_config.store.list()))
}

// POST /api/expenses
#[axum::debug_handler]
pub async fn create_expense(
    State(app_config): State<AppConfig>,
    ExpenseInput(payload): ExpenseInput,
) -> Result<(StatusCode, Json<CreatedExpense>), ApiError> {
    let new_expense = validate_new_expense(&payload)?;
    let expense = app_config.store.append(new_expense);

    tracing::info!(id = expense.id, "expense created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedExpense {
            message: "Expense successfully added.".to_string(),
            expense,
        }),
    ))
}

// OPTIONS /api/expenses
//
// Empty acknowledgment; the CORS headers come from the middleware layer.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

// Any other method on /api/expenses
pub async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::method_not_allowed(method)
}
