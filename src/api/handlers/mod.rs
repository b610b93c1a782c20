pub mod expenses;
pub mod health;
