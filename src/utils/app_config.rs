use std::sync::Arc;

use crate::expenses::store::{ExpenseStore, MemoryStore};

/// Shared application state handed to the router.
#[derive(Clone)]
pub struct AppConfig {
    pub store: Arc<dyn ExpenseStore>,
}

impl AppConfig {
    pub fn new(store: Arc<dyn ExpenseStore>) -> Self {
        Self { store }
    }

    /// State for a fresh process instance: the seeded in-memory store.
    pub fn with_seed_data() -> Self {
        Self::new(Arc::new(MemoryStore::with_seed_data()))
    }
}
