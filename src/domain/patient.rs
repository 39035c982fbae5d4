//! Patient record held by the registry.

/// A single admitted patient.
///
/// `patient_id` is assigned by the operator and treated as the lookup key,
/// but nothing prevents two records from sharing it.
#[derive(Debug, Clone, PartialEq)]
pub struct PatientRecord {
    /// Operator-assigned identifier
    pub patient_id: String,

    pub name: String,

    /// Ward / room label, the only field editable after admission
    pub room_number: String,

    /// Attending doctor, free text
    pub doctor_details: String,

    pub age: i32,

    pub gender: String,

    /// Admission date as typed ("dd.mm.yy"), never parsed
    pub admission_date: String,

    /// Total of the last submitted charges
    pub bill_amount: f64,

    /// False once soft-deleted
    pub active: bool,
}

impl PatientRecord {
    /// Create a newly admitted, active record with an empty bill.
    #[must_use]
    pub fn new(
        patient_id: impl Into<String>,
        name: impl Into<String>,
        room_number: impl Into<String>,
        doctor_details: impl Into<String>,
        age: i32,
        gender: impl Into<String>,
        admission_date: impl Into<String>,
    ) -> Self {
        Self {
            patient_id: patient_id.into(),
            name: name.into(),
            room_number: room_number.into(),
            doctor_details: doctor_details.into(),
            age,
            gender: gender.into(),
            admission_date: admission_date.into(),
            bill_amount: 0.0,
            active: true,
        }
    }

    /// Whether the record is shown in listings.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_defaults() {
        let record = PatientRecord::new("P001", "Asha", "101", "Dr. Rao", 34, "F", "01.01.24");

        assert!(record.is_active());
        assert_eq!(record.bill_amount, 0.0);
        assert_eq!(record.patient_id, "P001");
        assert_eq!(record.admission_date, "01.01.24");
    }

    #[test]
    fn test_admission_date_is_not_validated() {
        let record = PatientRecord::new("P002", "Ravi", "7", "Dr. Iyer", 51, "M", "sometime in May");
        assert_eq!(record.admission_date, "sometime in May");
    }
}
