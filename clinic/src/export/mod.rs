// clinic/src/export/mod.rs
//! Consumer-only serializers over the list results. Nothing in here
//! reads the database or makes decisions; it renders rows it is handed.

pub mod csv;
pub mod report;

pub use csv::{appointments_csv, doctors_csv, patients_csv};
pub use report::appointments_report;
