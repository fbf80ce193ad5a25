// models/src/medical/doctor.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub specialization: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default)]
pub struct NewDoctor {
    pub name: String,
    pub specialization: String,
    pub phone: String,
}
