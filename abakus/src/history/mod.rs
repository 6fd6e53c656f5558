//! The history of performed calculations.
//!
//! ```
//! use abakus::{history::SharedHistory, Calculator, Strictness};
//!
//! let history = SharedHistory::new();
//! let calculator = Calculator::with_history(history.clone(), Strictness::Lenient);
//!
//! calculator.perform("add", 2.0, 3.0).unwrap();
//! assert_eq!(history.len(), 1);
//!
//! history.clear();
//! assert!(calculator.last().is_none());
//! ```

#![allow(clippy::module_name_repetitions)]

mod store;

pub use store::HistoryStore;

use crate::CalculationRecord;
use lazy_static::lazy_static;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

lazy_static! {
    static ref GLOBAL_HISTORY: SharedHistory = SharedHistory::new();
}

/// Struct holding a `HistoryStore` mutex.
///
/// Clones share the same store.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct SharedHistory {
    store: Arc<Mutex<HistoryStore>>,
}

impl SharedHistory {
    /// Create a new, empty `SharedHistory`.
    pub fn new() -> Self {
        Self::with_store(HistoryStore::new())
    }

    /// Create a new `SharedHistory` initialized with a given `store`.
    pub fn with_store(store: HistoryStore) -> Self {
        Self {
            store: Arc::new(store.into()),
        }
    }

    /// The process-wide history.
    ///
    /// It is created on first use and lives until the process ends. Only an
    /// explicit `clear` resets it.
    pub fn global() -> Self {
        GLOBAL_HISTORY.clone()
    }

    /// Whether `self` and `other` share the same store.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.store, &other.store)
    }

    /// Add `record` to the end of the history.
    pub fn append(&self, record: CalculationRecord) {
        self.lock().append(record);
    }

    /// Return a copy of the most recently appended record.
    #[must_use]
    pub fn last(&self) -> Option<CalculationRecord> {
        self.lock().last().copied()
    }

    /// Drop all records at once.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// The number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no records are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Return a copy of all records, oldest first.
    #[must_use]
    pub fn records(&self) -> Vec<CalculationRecord> {
        self.lock().records().to_vec()
    }

    /// Return a copy of the entire `HistoryStore`.
    #[must_use]
    pub fn get(&self) -> HistoryStore {
        self.lock().clone()
    }

    // Every mutation is a single `Vec` call, so a poisoned store is still consistent.
    fn lock(&self) -> MutexGuard<HistoryStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
