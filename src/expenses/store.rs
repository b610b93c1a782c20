use std::sync::Mutex;

use chrono::NaiveDate;

use super::models::{Expense, NewExpense};

/// Read/append access to the expense collection.
///
/// Lifecycle and persistence policy belong to whoever constructs the store;
/// handlers only ever see these two operations.
pub trait ExpenseStore: Send + Sync {
    /// All expenses in insertion order.
    fn list(&self) -> Vec<Expense>;

    /// Assign the next id, append the record and return it.
    fn append(&self, new: NewExpense) -> Expense;
}

#[derive(Debug)]
struct Inner {
    expenses: Vec<Expense>,
    next_id: u64,
}

/// In-memory expense store.
///
/// State lives for the lifetime of the process and is discarded whenever the
/// process instance is recycled. Ids are never reused: `next_id` stays
/// greater than every id ever issued.
#[derive(Debug)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Create an empty store with the id counter at 1.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                expenses: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a store holding the two fixed example records, with the id
    /// counter at 3.
    pub fn with_seed_data() -> Self {
        let store = Self::new();
        store.append(NewExpense {
            amount: 50.00,
            description: "Groceries for the week".to_string(),
            category: "Food".to_string(),
            date: seed_date(2025, 12, 1),
        });
        store.append(NewExpense {
            amount: 15.50,
            description: "Bus fare".to_string(),
            category: "Transportation".to_string(),
            date: seed_date(2025, 12, 2),
        });
        store
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseStore for MemoryStore {
    fn list(&self) -> Vec<Expense> {
        self.inner
            .lock()
            .expect("expense store lock poisoned")
            .expenses
            .clone()
    }

    fn append(&self, new: NewExpense) -> Expense {
        let mut inner = self.inner.lock().expect("expense store lock poisoned");
        let expense = Expense {
            id: inner.next_id,
            amount: new.amount,
            description: new.description,
            category: new.category,
            date: new.date,
        };
        inner.next_id += 1;
        inner.expenses.push(expense.clone());
        expense
    }
}

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed date is a valid calendar date")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_expense(amount: f64, description: &str) -> NewExpense {
        NewExpense {
            amount,
            description: description.to_string(),
            category: "Misc".to_string(),
            date: seed_date(2025, 12, 10),
        }
    }

    #[test]
    fn test_store_creation() {
        let store = MemoryStore::new();
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_seed_data() {
        let store = MemoryStore::with_seed_data();
        let expenses = store.list();

        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].id, 1);
        assert_eq!(expenses[0].description, "Groceries for the week");
        assert_eq!(expenses[1].id, 2);
        assert_eq!(expenses[1].description, "Bus fare");

        let created = store.append(new_expense(9.99, "Snacks"));
        assert_eq!(created.id, 3);
    }

    #[test]
    fn test_append_assigns_increasing_ids() {
        let store = MemoryStore::new();
        let first = store.append(new_expense(1.0, "First"));
        let second = store.append(new_expense(2.0, "Second"));
        let third = store.append(new_expense(3.0, "Third"));

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(third.id, 3);
    }

    #[test]
    fn test_append_grows_list_by_one() {
        let store = MemoryStore::with_seed_data();
        let before = store.list().len();

        store.append(new_expense(4.20, "Coffee"));

        assert_eq!(store.list().len(), before + 1);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = MemoryStore::new();
        store.append(new_expense(1.0, "First"));
        store.append(new_expense(2.0, "Second"));

        let expenses = store.list();
        assert_eq!(expenses[0].description, "First");
        assert_eq!(expenses[1].description, "Second");
    }
}
