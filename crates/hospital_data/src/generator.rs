//! Record builders for every hospital table.
//!
//! A [`Generator`] turns a table plus the parent ids visible to it into one row of
//! [`SqlValue`]s, ordered like [`Table::columns`]. Output is deterministic for a
//! given seed and reference date.

use crate::fake::{age_on, FakeData};
use crate::schema::Table;
use chrono::{NaiveDate, NaiveTime};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

const GENDERS: &[&str] = &["Male", "Female"];

const SPECIALITIES: &[&str] = &[
    "Cardiology",
    "Neurology",
    "Orthopedics",
    "ENT",
    "Oncology",
    "Dermatology",
    "Pediatrics",
];

const APPOINTMENT_STATUSES: &[&str] = &["Scheduled", "Completed", "Cancelled"];

const DEPARTMENT_NAMES: &[&str] = &[
    "Anesthesia",
    "Blood Bank",
    "Oncology",
    "Neonotology",
    "Neurology",
    "Plastic Surgery",
    "Urology",
    "Pathology",
    "Radiology",
    "General Surgery",
];

const HOSPITAL_LOCATIONS: &[&str] = &[
    "Block A",
    "Block B",
    "First Floor",
    "Second Floor",
    "Wing 1",
    "Wing 2",
    "North Wing",
    "South Wing",
    "Main Building",
    "Annex",
];

const TEST_NAMES: &[&str] = &[
    "Blood Test",
    "X-Ray",
    "MRI",
    "CT Scan",
    "Urine Test",
    "COVID Test",
    "ECG",
];

const TEST_RESULTS: &[&str] = &["Normal", "Abnormal", "Needs Follow-Up", "Critical"];

const STAFF_ROLES: &[&str] = &[
    "Nurse",
    "Cleaner",
    "Security Guard",
    "Ward Boy",
    "Lab Assistant",
    "Reception Support",
    "Maintenance",
];

const PROCEDURES: &[&str] = &[
    "Blood Pressure Monitoring",
    "X-Ray Follow-up",
    "General Checkup",
    "MRI Scan",
    "Medication Adjustment",
    "Physical Therapy",
    "Surgery Follow-up",
];

const DIAGNOSES: &[&str] = &[
    "Diabetes Type 2",
    "Hypertension",
    "Fracture",
    "Migraine",
    "Pneumonia",
    "Kidney Stones",
    "Arthritis",
    "Allergy",
    "Asthma",
    "Heart Disease",
    "Depression",
    "COVID-19",
    "Tuberculosis",
    "Hepatitis B",
    "Thyroid Disorder",
    "Gallstones",
    "Chronic Back Pain",
    "Anemia",
    "High Cholesterol",
    "Skin Infection",
];

const TREATMENTS: &[&str] = &[
    "Medication and diet control",
    "Cast and rest",
    "Antibiotics",
    "Pain management",
    "Physical therapy",
    "Surgery",
    "Regular checkups",
    "Inhaler therapy",
    "Cognitive Behavioral Therapy",
    "Vitamin supplements",
    "Vaccination and isolation",
    "Blood transfusion",
    "Dialysis",
    "Laparoscopic surgery",
    "Topical creams",
    "Cholesterol-lowering drugs",
    "Hormone therapy",
    "Lifestyle modification",
    "Mental health counseling",
    "Insulin therapy",
];

const MEDICINES: &[&str] = &[
    "Paracetamol",
    "Ibuprofen",
    "Aspirin",
    "Amoxicillin",
    "Metformin",
    "Lisinopril",
    "Omeprazole",
    "Simvastatin",
    "Atorvastatin",
    "Furosemide",
    "Prednisone",
    "Insulin",
    "Hydrochlorothiazide",
    "Ciprofloxacin",
    "Albuterol",
    "Clonazepam",
    "Warfarin",
    "Levothyroxine",
    "Methotrexate",
    "Diazepam",
];

const MANUFACTURERS: &[&str] = &[
    "Pfizer",
    "AstraZeneca",
    "Novartis",
    "Johnson & Johnson",
    "Bayer",
    "Merck",
    "Sanofi",
    "GlaxoSmithKline",
    "Roche",
    "Eli Lilly",
];

const ROOM_TYPES: &[&str] = &["Single", "Double", "ICU", "General", "VIP"];

/// Share of rooms generated without a patient
const ROOM_VACANCY: f64 = 0.3;

const PAYMENT_STATUSES: &[&str] = &["Paid", "Pending"];

const VEHICLE_TYPES: &[&str] = &["Car", "Motorbike", "Truck", "Van", "Bicycle"];

const PLATE_PREFIXES: &[&str] = &["LE", "ISB", "KHI"];

/// SQL dialect used when rendering values as literals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    #[default]
    Postgres,
    Sqlite,
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Dialect::Postgres),
            "sqlite" | "sqlite3" => Ok(Dialect::Sqlite),
            _ => Err(format!(
                "Unknown dialect: {}. Valid options: postgres, sqlite",
                s
            )),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Postgres => write!(f, "postgres"),
            Dialect::Sqlite => write!(f, "sqlite"),
        }
    }
}

/// SQL value representation
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    Time(NaiveTime),
}

impl SqlValue {
    /// Format as a literal for an INSERT statement
    pub fn to_sql(&self, dialect: Dialect) -> String {
        match self {
            SqlValue::Null => "NULL".to_string(),
            SqlValue::Int(n) => n.to_string(),
            SqlValue::Float(n) => format!("{:.2}", n),
            SqlValue::Text(s) => format!("'{}'", escape_string(s)),
            SqlValue::Date(d) => match dialect {
                Dialect::Postgres => format!("DATE '{}'", d.format("%Y-%m-%d")),
                Dialect::Sqlite => format!("'{}'", d.format("%Y-%m-%d")),
            },
            SqlValue::Time(t) => match dialect {
                Dialect::Postgres => format!("TIME '{}'", t.format("%H:%M:%S")),
                Dialect::Sqlite => format!("'{}'", t.format("%H:%M:%S")),
            },
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            SqlValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SqlValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }
}

/// Both supported dialects escape quotes by doubling them
fn escape_string(s: &str) -> String {
    s.replace('\'', "''")
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        SqlValue::Text(s.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(s: String) -> Self {
        SqlValue::Text(s)
    }
}

impl From<i64> for SqlValue {
    fn from(n: i64) -> Self {
        SqlValue::Int(n)
    }
}

impl From<NaiveDate> for SqlValue {
    fn from(d: NaiveDate) -> Self {
        SqlValue::Date(d)
    }
}

impl From<NaiveTime> for SqlValue {
    fn from(t: NaiveTime) -> Self {
        SqlValue::Time(t)
    }
}

/// A row of generated data
pub type Row = Vec<SqlValue>;

/// Parent primary keys visible to a dependent generator
#[derive(Debug, Clone, Default)]
pub struct ParentIds {
    ids: BTreeMap<Table, Vec<i64>>,
}

impl ParentIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, table: Table, ids: Vec<i64>) {
        self.ids.insert(table, ids);
    }

    pub fn get(&self, table: Table) -> &[i64] {
        self.ids.get(&table).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// First parent of `table` with no ids, if any
    pub fn missing_for(&self, table: Table) -> Option<Table> {
        table
            .parents()
            .iter()
            .copied()
            .find(|parent| self.get(*parent).is_empty())
    }
}

/// Main data generator
pub struct Generator {
    fake: FakeData<ChaCha8Rng>,
    today: NaiveDate,
}

impl Generator {
    pub fn new(seed: u64, today: NaiveDate) -> Self {
        Self {
            fake: FakeData::new(ChaCha8Rng::seed_from_u64(seed)),
            today,
        }
    }

    /// Reference date for ages and "this year" ranges
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Build the `index`-th row of `table` for the current generator call.
    ///
    /// Panics if `table` has a parent with no ids in `parents`; callers check
    /// [`ParentIds::missing_for`] first.
    pub fn row(&mut self, table: Table, index: usize, parents: &ParentIds) -> Row {
        match table {
            Table::Patient => self.patient(),
            Table::Doctor => self.doctor(),
            Table::Appointment => self.appointment(parents),
            Table::Reception => self.reception(),
            Table::Department => department(index),
            Table::Laboratory => self.laboratory(parents),
            Table::Staff => self.staff(),
            Table::Prescription => self.prescription(parents),
            Table::Administrator => self.administrator(),
            Table::MedicalHistory => self.medical_history(parents),
            Table::Medicine => self.medicine(),
            Table::Supplier => self.supplier(),
            Table::Room => self.room(parents),
            Table::Payment => self.payment(parents),
            Table::Parking => self.parking(),
        }
    }

    fn patient(&mut self) -> Row {
        let first_name = self.fake.first_name();
        let last_name = self.fake.last_name();
        let date_of_birth = self.fake.date_of_birth(self.today, 1, 90);
        let gender = *self.fake.pick(GENDERS);
        let age = age_on(date_of_birth, self.today);
        vec![
            first_name.into(),
            last_name.into(),
            date_of_birth.into(),
            gender.into(),
            age.into(),
            self.fake.contact_number().into(),
            self.fake.email().into(),
            self.fake.address().into(),
        ]
    }

    fn doctor(&mut self) -> Row {
        vec![
            "Dr.".into(),
            self.fake.last_name().into(),
            (*self.fake.pick(SPECIALITIES)).into(),
            self.fake.email().into(),
            self.fake.contact_number().into(),
        ]
    }

    fn appointment(&mut self, parents: &ParentIds) -> Row {
        vec![
            self.fake.pick_id(parents.get(Table::Patient)).into(),
            self.fake.pick_id(parents.get(Table::Doctor)).into(),
            self.fake.date_past_year(self.today).into(),
            self.fake.time_of_day().into(),
            (*self.fake.pick(APPOINTMENT_STATUSES)).into(),
        ]
    }

    fn reception(&mut self) -> Row {
        vec![
            self.fake.full_name().into(),
            self.fake.contact_number().into(),
        ]
    }

    fn laboratory(&mut self, parents: &ParentIds) -> Row {
        vec![
            self.fake.pick_id(parents.get(Table::Patient)).into(),
            self.fake.pick_id(parents.get(Table::Doctor)).into(),
            (*self.fake.pick(TEST_NAMES)).into(),
            self.fake.date_this_year(self.today).into(),
            self.fake.time_of_day().into(),
            (*self.fake.pick(TEST_RESULTS)).into(),
        ]
    }

    fn staff(&mut self) -> Row {
        vec![
            self.fake.first_name().into(),
            self.fake.last_name().into(),
            (*self.fake.pick(STAFF_ROLES)).into(),
            self.fake.contact_number().into(),
        ]
    }

    fn prescription(&mut self, parents: &ParentIds) -> Row {
        let patient_id = self.fake.pick_id(parents.get(Table::Patient));
        let doctor_id = self.fake.pick_id(parents.get(Table::Doctor));
        let procedure = *self.fake.pick(PROCEDURES);
        let procedure_date = self.fake.date_this_year(self.today);
        let next_appointment = self.fake.date_between(procedure_date, self.today);
        vec![
            patient_id.into(),
            doctor_id.into(),
            procedure.into(),
            procedure_date.into(),
            next_appointment.into(),
        ]
    }

    fn administrator(&mut self) -> Row {
        vec![
            self.fake.first_name().into(),
            self.fake.last_name().into(),
            self.fake.contact_number().into(),
        ]
    }

    fn medical_history(&mut self, parents: &ParentIds) -> Row {
        let patient_id = self.fake.pick_id(parents.get(Table::Patient));
        let doctor_id = self.fake.pick_id(parents.get(Table::Doctor));
        let diagnosis = *self.fake.pick(DIAGNOSES);
        let treatment_plan = *self.fake.pick(TREATMENTS);
        let admission_date = self.fake.date_this_year(self.today);
        let discharge_date = self.fake.date_between(admission_date, self.today);
        vec![
            patient_id.into(),
            doctor_id.into(),
            diagnosis.into(),
            treatment_plan.into(),
            admission_date.into(),
            discharge_date.into(),
        ]
    }

    fn medicine(&mut self) -> Row {
        let name = *self.fake.pick(MEDICINES);
        let dosage = format!("{} mg", self.fake.int_range(1, 250));
        vec![
            name.into(),
            dosage.into(),
            (*self.fake.pick(MANUFACTURERS)).into(),
        ]
    }

    fn supplier(&mut self) -> Row {
        vec![
            self.fake.company_name().into(),
            self.fake.contact_number().into(),
            self.fake.email().into(),
        ]
    }

    fn room(&mut self, parents: &ParentIds) -> Row {
        let patient_id = if self.fake.bool_with_probability(ROOM_VACANCY) {
            None
        } else {
            Some(self.fake.pick_id(parents.get(Table::Patient)))
        };
        let room_number = self.fake.int_range(101, 999);
        let room_type = *self.fake.pick(ROOM_TYPES);
        let status = if patient_id.is_some() {
            "Occupied"
        } else {
            "Vacant"
        };
        vec![
            patient_id.map(SqlValue::Int).unwrap_or(SqlValue::Null),
            room_number.into(),
            room_type.into(),
            status.into(),
        ]
    }

    fn payment(&mut self, parents: &ParentIds) -> Row {
        vec![
            self.fake.pick_id(parents.get(Table::Patient)).into(),
            SqlValue::Float(self.fake.amount(100.0, 1000.0)),
            (*self.fake.pick(PAYMENT_STATUSES)).into(),
        ]
    }

    fn parking(&mut self) -> Row {
        let plate = format!(
            "{}-{}",
            self.fake.pick(PLATE_PREFIXES),
            self.fake.int_range(1000, 9999)
        );
        vec![
            self.fake.full_name().into(),
            self.fake.contact_number().into(),
            (*self.fake.pick(VEHICLE_TYPES)).into(),
            plate.into(),
            self.fake.time_of_day().into(),
        ]
    }
}

/// Departments cycle through the fixed name and location lists by row index
fn department(index: usize) -> Row {
    vec![
        DEPARTMENT_NAMES[index % DEPARTMENT_NAMES.len()].into(),
        HOSPITAL_LOCATIONS[index % HOSPITAL_LOCATIONS.len()].into(),
    ]
}
