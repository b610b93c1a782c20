// Public library interface for expense-api
pub mod api;
pub mod expenses;
pub mod utils;
