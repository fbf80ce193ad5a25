// models/src/medical/appointment.rs
use serde::{Deserialize, Serialize};

/// An appointment row as stored. `date` is kept in `%Y-%m-%d` form for new
/// writes; `time` is free text ("10:30 AM").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub patient_id: i64,
    pub doctor_id: i64,
    pub date: String,
    pub time: String,
    pub symptoms: Option<String>,
}

/// Listing row: appointment joined with patient and doctor names.
/// Names are Options because the join is a LEFT JOIN over rows that may
/// have been cascade-orphaned in older datasets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentRow {
    pub id: i64,
    pub patient_id: i64,
    pub patient_name: Option<String>,
    pub doctor_name: Option<String>,
    pub date: String,
    pub time: String,
    pub symptoms: Option<String>,
}

/// Input for booking. The date string is parsed by the flexible parser
/// before anything touches storage.
#[derive(Debug, Clone, Default)]
pub struct BookingRequest {
    pub patient_id: i64,
    pub doctor_id: i64,
    pub date: String,
    pub time: String,
    pub symptoms: Option<String>,
}
