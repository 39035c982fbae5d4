//! In-memory adapter: Implementation of `PatientStore`.
//!
//! Records live in a `Vec` for the lifetime of the process and are lost on
//! exit.

use crate::domain::PatientRecord;
use crate::ports::PatientStore;

/// `Vec`-backed patient store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Vec<PatientRecord>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PatientStore for InMemoryStore {
    fn append(&mut self, record: PatientRecord) {
        tracing::debug!(
            patient_id = %record.patient_id,
            index = self.records.len(),
            "Appending patient record"
        );
        self.records.push(record);
    }

    fn records(&self) -> &[PatientRecord] {
        &self.records
    }

    fn records_mut(&mut self) -> &mut [PatientRecord] {
        &mut self.records
    }
}
