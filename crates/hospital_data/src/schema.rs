//! Catalog of the hospital tables this crate produces rows for.
//!
//! The schema itself is owned by the target database; this module only records
//! the table names, their serial id columns, the columns an INSERT fills in and
//! which parent tables a row references.

use std::fmt;
use std::str::FromStr;

/// A table of the hospital schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Table {
    Patient,
    Doctor,
    Appointment,
    Reception,
    Department,
    Laboratory,
    Staff,
    Prescription,
    Administrator,
    MedicalHistory,
    Medicine,
    Supplier,
    Room,
    Payment,
    Parking,
}

impl Table {
    /// Every table, in the order their sequences are reset
    pub const ALL: [Table; 15] = [
        Table::Patient,
        Table::Doctor,
        Table::Appointment,
        Table::Reception,
        Table::Department,
        Table::Laboratory,
        Table::Staff,
        Table::Prescription,
        Table::Administrator,
        Table::MedicalHistory,
        Table::Medicine,
        Table::Supplier,
        Table::Room,
        Table::Payment,
        Table::Parking,
    ];

    /// Generation order: every parent comes before its children
    pub const SEED_ORDER: [Table; 15] = [
        Table::Patient,
        Table::Doctor,
        Table::Appointment,
        Table::Reception,
        Table::Department,
        Table::Laboratory,
        Table::Staff,
        Table::Administrator,
        Table::Supplier,
        Table::Medicine,
        Table::Prescription,
        Table::MedicalHistory,
        Table::Room,
        Table::Payment,
        Table::Parking,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Table::Patient => "patient",
            Table::Doctor => "doctor",
            Table::Appointment => "appointment",
            Table::Reception => "reception",
            Table::Department => "department",
            Table::Laboratory => "laboratory",
            Table::Staff => "staff",
            Table::Prescription => "prescription",
            Table::Administrator => "administrator",
            Table::MedicalHistory => "medical_history",
            Table::Medicine => "medicine",
            Table::Supplier => "supplier",
            Table::Room => "room",
            Table::Payment => "payment",
            Table::Parking => "parking",
        }
    }

    /// Serial primary key column
    pub fn id_column(&self) -> &'static str {
        match self {
            Table::Patient => "patient_id",
            Table::Doctor => "doctor_id",
            Table::Appointment => "appointment_id",
            Table::Reception => "receptionist_id",
            Table::Department => "department_id",
            Table::Laboratory => "test_id",
            Table::Staff => "staff_id",
            Table::Prescription => "prescription_id",
            Table::Administrator => "admin_id",
            Table::MedicalHistory => "record_id",
            Table::Medicine => "medicine_id",
            Table::Supplier => "supplier_id",
            Table::Room => "room_id",
            Table::Payment => "payment_id",
            Table::Parking => "driver_id",
        }
    }

    /// Columns filled in by an INSERT, in value order
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Table::Patient => &[
                "first_name",
                "last_name",
                "date_of_birth",
                "gender",
                "age",
                "contact_number",
                "email",
                "address",
            ],
            Table::Doctor => &[
                "first_name",
                "last_name",
                "speciality",
                "email",
                "contact_no",
            ],
            Table::Appointment => &[
                "patient_id",
                "doctor_id",
                "appointment_date",
                "appointment_time",
                "appointment_status",
            ],
            Table::Reception => &["receptionist_name", "contact_no"],
            Table::Department => &["department_name", "department_location"],
            Table::Laboratory => &[
                "patient_id",
                "doctor_id",
                "test_name",
                "test_date",
                "test_time",
                "test_result",
            ],
            Table::Staff => &["first_name", "last_name", "staff_role", "contact_number"],
            Table::Prescription => &[
                "patient_id",
                "doctor_id",
                "patient_procedure",
                "procedure_date",
                "next_appointment",
            ],
            Table::Administrator => &["first_name", "last_name", "contact_no"],
            Table::MedicalHistory => &[
                "patient_id",
                "doctor_id",
                "diagnosis",
                "treatment_plan",
                "admission_date",
                "discharge_date",
            ],
            Table::Medicine => &["medicine_name", "dosage", "manufacturer"],
            Table::Supplier => &["supplier_name", "contact_no", "email"],
            Table::Room => &["patient_id", "room_number", "room_type", "status"],
            Table::Payment => &["patient_id", "amount", "payment_status"],
            Table::Parking => &[
                "driver_name",
                "driver_contact",
                "vehicle_type",
                "vehicle_no",
                "exit_time",
            ],
        }
    }

    /// Tables whose ids this table's rows reference
    pub fn parents(&self) -> &'static [Table] {
        match self {
            Table::Appointment
            | Table::Laboratory
            | Table::Prescription
            | Table::MedicalHistory => &[Table::Patient, Table::Doctor],
            Table::Room | Table::Payment => &[Table::Patient],
            _ => &[],
        }
    }

    pub fn is_dependent(&self) -> bool {
        !self.parents().is_empty()
    }

    /// Row count used when nothing else is configured
    pub fn default_rows(&self) -> usize {
        match self {
            Table::Patient => 1_000_000,
            Table::Doctor => 50_000,
            Table::Appointment => 1_000_000,
            Table::Reception => 20_000,
            Table::Department => 50,
            Table::Laboratory => 1_000_000,
            Table::Staff => 200,
            Table::Prescription => 1_000_000,
            Table::Administrator => 10,
            Table::MedicalHistory => 1_000_000,
            Table::Medicine => 500_000,
            Table::Supplier => 1_000,
            Table::Room => 50,
            Table::Payment => 1_000_000,
            Table::Parking => 50_000,
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Table {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Table::ALL
            .iter()
            .copied()
            .find(|t| t.name() == lower)
            .ok_or_else(|| {
                format!(
                    "Unknown table: {}. Valid tables: {}",
                    s,
                    Table::ALL.map(|t| t.name()).join(", ")
                )
            })
    }
}
