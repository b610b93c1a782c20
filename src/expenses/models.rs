use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single recorded financial transaction.
///
/// The `date` serializes as `YYYY-MM-DD` text on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: u64,
    pub amount: f64,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
}

/// A validated creation payload. Produced only by the API validation layer;
/// the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub amount: f64,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
}
