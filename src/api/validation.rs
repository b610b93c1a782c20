use chrono::NaiveDate;
use serde_json::Value;

use crate::api::error::ApiError;
use crate::expenses::models::NewExpense;

pub const REQUIRED_FIELDS: [&str; 4] = ["amount", "description", "category", "date"];

/// Validate a create-expense body: presence first, then format, stopping at
/// the first failure.
///
/// Presence is an explicit schema rule, not a truthiness check: absent,
/// null, or empty/whitespace values are missing for every field, and a zero
/// amount counts as not provided.
pub fn validate_new_expense(body: &Value) -> Result<NewExpense, ApiError> {
    for field in REQUIRED_FIELDS {
        if !is_provided(field, body.get(field)) {
            return Err(ApiError::missing_fields(body.clone()));
        }
    }

    let amount = coerce_amount(&body["amount"])?;
    let description = require_string(&body["description"], "description")?;
    let category = require_string(&body["category"], "category")?;
    let date = parse_date(&body["date"])?;

    // Numeric text like "0.00" passes the presence check but still names a
    // zero amount.
    if amount == 0.0 {
        return Err(ApiError::missing_fields(body.clone()));
    }

    Ok(NewExpense {
        amount,
        description,
        category,
        date,
    })
}

fn is_provided(field: &str, value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Number(n)) if field == "amount" => n.as_f64().is_some_and(|v| v != 0.0),
        Some(_) => true,
    }
}

/// Accepts a JSON number or numeric text; either way the stored value is a
/// finite f64.
fn coerce_amount(value: &Value) -> Result<f64, ApiError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(ApiError::invalid_format("Invalid data types: 'amount' must be a number.")),
    }
}

fn require_string(value: &Value, field: &str) -> Result<String, ApiError> {
    value
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| ApiError::invalid_format(format!("Invalid data types: '{}' must be a string.", field)))
}

fn parse_date(value: &Value) -> Result<NaiveDate, ApiError> {
    value
        .as_str()
        .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
        .ok_or_else(|| {
            ApiError::invalid_format("Invalid data types: 'date' must be a valid YYYY-MM-DD date string.")
        })
}
