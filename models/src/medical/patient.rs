// models/src/medical/patient.rs
use serde::{Deserialize, Serialize};

/// A patient row as stored in the `patients` table.
///
/// The id is a SQLite rowid, immutable once assigned; appointments and
/// optionally one user account reference it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub gender: String,
    pub phone: String,
    pub address: String,
}

/// Input for creating a patient. `linked_user_id` optionally back-fills
/// `users.patient_ref_id` on an existing user account.
#[derive(Debug, Clone, Default)]
pub struct NewPatient {
    pub name: String,
    pub age: i64,
    pub gender: String,
    pub phone: String,
    pub address: String,
    pub linked_user_id: Option<i64>,
}

/// Outcome of a create. `user_linked` is false when no link was requested
/// or when the requested user id did not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientCreated {
    pub patient_id: i64,
    pub user_linked: bool,
}
