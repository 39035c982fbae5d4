//! Registry service: patient admission, lookup, soft delete and billing.
//!
//! Every lookup is a linear scan for the first exact id match in insertion
//! order, and ignores the `active` flag. Only listing filters out
//! soft-deleted records.

use crate::adapters::InMemoryStore;
use crate::domain::PatientRecord;
use crate::ports::PatientStore;

/// Error type for registry lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Patient not found: {0}")]
    NotFound(String),
}

/// Service owning the patient records.
pub struct RegistryService<S = InMemoryStore>
where
    S: PatientStore,
{
    store: S,
}

impl RegistryService<InMemoryStore> {
    /// Create a registry backed by an empty in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(InMemoryStore::new())
    }
}

impl<S> RegistryService<S>
where
    S: PatientStore,
{
    /// Create a registry over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Admit a patient. Duplicate ids are accepted.
    pub fn add(&mut self, record: PatientRecord) {
        let patient_id = record.patient_id.clone();
        self.store.append(record);
        tracing::info!(
            patient_id = %patient_id,
            total_records = self.store.len(),
            "Patient added"
        );
    }

    /// Active records in insertion order.
    #[must_use]
    pub fn list_active(&self) -> Vec<&PatientRecord> {
        self.store
            .records()
            .iter()
            .filter(|record| record.is_active())
            .collect()
    }

    /// First record with this id, active or not.
    ///
    /// # Errors
    /// Returns `RegistryError::NotFound` if no record matches.
    pub fn find_by_id(&self, patient_id: &str) -> Result<&PatientRecord, RegistryError> {
        let index = self.locate(patient_id)?;
        Ok(&self.store.records()[index])
    }

    /// Overwrite the room number. No other field is editable.
    ///
    /// # Errors
    /// Returns `RegistryError::NotFound` if no record matches.
    pub fn update_room(
        &mut self,
        patient_id: &str,
        room_number: impl Into<String>,
    ) -> Result<(), RegistryError> {
        let record = self.find_mut(patient_id)?;
        record.room_number = room_number.into();
        tracing::info!(patient_id = %patient_id, "Room number updated");
        Ok(())
    }

    /// Mark a record inactive. Repeating the call on an inactive record succeeds.
    ///
    /// # Errors
    /// Returns `RegistryError::NotFound` if no record matches.
    pub fn soft_delete(&mut self, patient_id: &str) -> Result<(), RegistryError> {
        let record = self.find_mut(patient_id)?;
        record.active = false;
        tracing::info!(
            patient_id = %patient_id,
            active = self.active_count(),
            "Patient soft-deleted"
        );
        Ok(())
    }

    /// Replace the bill with the sum of the three charges and return it.
    ///
    /// Charges are not checked for sign and the total is not rounded.
    ///
    /// # Errors
    /// Returns `RegistryError::NotFound` if no record matches.
    pub fn bill(
        &mut self,
        patient_id: &str,
        room_charge: f64,
        pharmacy_charge: f64,
        diagnostics_charge: f64,
    ) -> Result<f64, RegistryError> {
        let record = self.find_mut(patient_id)?;
        let total = room_charge + pharmacy_charge + diagnostics_charge;
        record.bill_amount = total;
        tracing::info!(patient_id = %patient_id, "Bill generated");
        Ok(total)
    }

    /// Number of records ever added, including soft-deleted ones.
    #[must_use]
    pub fn total_records(&self) -> usize {
        self.store.len()
    }

    /// Number of records currently listed.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.store.records().iter().filter(|r| r.is_active()).count()
    }

    fn locate(&self, patient_id: &str) -> Result<usize, RegistryError> {
        self.store.position(patient_id).ok_or_else(|| {
            tracing::debug!(patient_id = %patient_id, "Patient lookup missed");
            RegistryError::NotFound(patient_id.to_string())
        })
    }

    fn find_mut(&mut self, patient_id: &str) -> Result<&mut PatientRecord, RegistryError> {
        let index = self.locate(patient_id)?;
        Ok(&mut self.store.records_mut()[index])
    }
}
