use crate::CalculationRecord;

/// An append-only, clearable sequence of `CalculationRecord`s.
///
/// Records keep their insertion order. The only ways to change the store are
/// `append` and `clear`.
#[derive(Debug, Default, Clone)]
pub struct HistoryStore {
    records: Vec<CalculationRecord>,
}

impl HistoryStore {
    /// Create an empty `HistoryStore`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Add `record` to the end of the history.
    pub fn append(&mut self, record: CalculationRecord) {
        self.records.push(record);
        log::trace!("Appended record #{}: {}.", self.records.len(), record);
    }

    /// Return the most recently appended record.
    #[must_use]
    pub fn last(&self) -> Option<&CalculationRecord> {
        self.records.last()
    }

    /// Drop all records at once.
    pub fn clear(&mut self) {
        log::trace!("Clearing {} records.", self.records.len());
        self.records.clear();
    }

    /// The number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, oldest first.
    #[must_use]
    pub fn records(&self) -> &[CalculationRecord] {
        &self.records
    }
}
