//! Store port: Trait for the patient record collection.
//!
//! The store keeps records in insertion order; that order is the only one
//! the registry ever exposes.

use crate::domain::PatientRecord;

/// Ordered, append-only collection of patient records.
///
/// Records are never removed. Implementations must preserve insertion order
/// in both `records` and `records_mut`.
pub trait PatientStore {
    /// Append a record at the end. Duplicate ids are accepted.
    fn append(&mut self, record: PatientRecord);

    /// All records, including inactive ones, in insertion order.
    fn records(&self) -> &[PatientRecord];

    /// Mutable view over all records, in insertion order.
    fn records_mut(&mut self) -> &mut [PatientRecord];

    /// Index of the first record whose id matches exactly.
    fn position(&self, patient_id: &str) -> Option<usize> {
        self.records()
            .iter()
            .position(|record| record.patient_id == patient_id)
    }

    /// Number of stored records.
    fn len(&self) -> usize {
        self.records().len()
    }

    /// Whether the store holds no records.
    fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}
