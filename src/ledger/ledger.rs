use std::fmt;

use tracing::{debug, info, warn};

use crate::{
    domain::ExpenseRecord,
    errors::Result,
    storage::{PreferencesStore, EXPENSES_KEY},
    utils::persistence::{decode_records, encode_records},
};

/// Append-only list of expenses backed by a preferences store.
///
/// The in-memory sequence is authoritative for the session; every append
/// re-encodes the whole list and overwrites the stored value.
pub struct ExpenseLedger {
    records: Vec<ExpenseRecord>,
    store: Box<dyn PreferencesStore>,
    key: String,
}

impl ExpenseLedger {
    pub fn new(store: Box<dyn PreferencesStore>) -> Self {
        Self::with_key(store, EXPENSES_KEY)
    }

    pub fn with_key(store: Box<dyn PreferencesStore>, key: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            store,
            key: key.into(),
        }
    }

    /// Replaces the in-memory records with the persisted ones. Missing or
    /// undecodable data leaves the ledger empty.
    pub fn load(&mut self) -> &[ExpenseRecord] {
        self.records = match self.store.get(&self.key) {
            Ok(Some(raw)) => match decode_records(&raw) {
                Ok(records) => records,
                Err(err) => {
                    warn!(key = %self.key, error = %err, "discarding undecodable expenses");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to read expenses");
                Vec::new()
            }
        };
        info!(count = self.records.len(), "expenses loaded");
        &self.records
    }

    /// Records a new expense and persists the ledger. No validation happens here.
    pub fn append(
        &mut self,
        amount: f64,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> ExpenseRecord {
        let record = ExpenseRecord::new(amount, description, category);
        debug!(id = %record.id(), amount, "appending expense");
        self.records.push(record.clone());
        self.persist();
        record
    }

    /// Persists the ledger, logging and swallowing any failure. The in-memory
    /// state stays correct but the next load will miss unsaved records.
    pub fn persist(&self) {
        if let Err(err) = self.try_persist() {
            warn!(key = %self.key, error = %err, "failed to persist expenses");
        }
    }

    pub fn try_persist(&self) -> Result<()> {
        let encoded = encode_records(&self.records)?;
        self.store.set(&self.key, &encoded)
    }

    pub fn total(&self) -> f64 {
        self.records.iter().map(ExpenseRecord::amount).sum()
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl fmt::Debug for ExpenseLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpenseLedger")
            .field("key", &self.key)
            .field("records", &self.records)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{errors::FormError, storage::MemoryPreferences};

    struct ReadOnly;

    impl PreferencesStore for ReadOnly {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }
        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(FormError::Storage("read-only".into()))
        }
        fn remove(&self, _key: &str) -> Result<()> {
            Err(FormError::Storage("read-only".into()))
        }
    }

    #[test]
    fn total_is_exact_sum_including_negatives() {
        let mut ledger = ExpenseLedger::new(Box::new(MemoryPreferences::new()));
        assert_eq!(ledger.total(), 0.0);

        ledger.append(50.75, "Lunch", "Food");
        ledger.append(-10.0, "Refund", "Food");
        assert_eq!(ledger.total(), 40.75);

        ledger.append(0.0, "Free sample", "Shopping");
        assert_eq!(ledger.total(), 40.75);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn append_keeps_prior_records_untouched() {
        let mut ledger = ExpenseLedger::new(Box::new(MemoryPreferences::new()));
        let first = ledger.append(5.0, "Coffee", "Food");
        let snapshot = ledger.records().to_vec();

        ledger.append(7.0, "Bus", "Transport");
        assert_eq!(&ledger.records()[..1], snapshot.as_slice());
        assert_eq!(ledger.records()[0], first);
        assert_eq!(ledger.records()[1].description(), "Bus");
    }

    #[test]
    fn load_after_persist_reproduces_sequence() {
        let shared = Arc::new(MemoryPreferences::new());
        let mut ledger = ExpenseLedger::new(Box::new(shared.clone()));
        ledger.append(12.0, "Cinema", "Socializing");
        ledger.append(3.5, "Metro", "Transport");

        let mut reopened = ExpenseLedger::new(Box::new(shared));
        let loaded = reopened.load().to_vec();
        assert_eq!(loaded, ledger.records());
        assert_eq!(reopened.total(), ledger.total());
    }

    #[test]
    fn load_replaces_in_memory_state() {
        let shared = Arc::new(MemoryPreferences::new());
        let mut ledger = ExpenseLedger::new(Box::new(shared.clone()));
        ledger.append(1.0, "Gum", "Food");
        shared.set(EXPENSES_KEY, "[]").unwrap();

        assert!(ledger.load().is_empty());
        assert!(ledger.is_empty());
    }

    #[test]
    fn corrupt_or_missing_data_loads_empty() {
        let store = MemoryPreferences::new();
        store.set(EXPENSES_KEY, "definitely not json").unwrap();
        let mut ledger = ExpenseLedger::new(Box::new(store));
        assert!(ledger.load().is_empty());

        let mut fresh = ExpenseLedger::new(Box::new(MemoryPreferences::new()));
        assert!(fresh.load().is_empty());
        assert_eq!(fresh.total(), 0.0);
    }

    #[test]
    fn persistence_failure_is_silent_for_append() {
        let mut ledger = ExpenseLedger::new(Box::new(ReadOnly));
        let record = ledger.append(9.99, "Book", "Shopping");

        assert_eq!(ledger.records(), &[record]);
        assert!(matches!(ledger.try_persist(), Err(FormError::Storage(_))));
    }

    #[test]
    fn custom_key_is_respected() {
        let shared = Arc::new(MemoryPreferences::new());
        let mut ledger = ExpenseLedger::with_key(Box::new(shared.clone()), "alt");
        ledger.append(1.0, "Stamp", "Other");

        assert!(shared.get("alt").unwrap().is_some());
        assert!(shared.get(EXPENSES_KEY).unwrap().is_none());
    }
}
