// clinic/src/patient/mod.rs

pub mod patient_service;

pub use patient_service::PatientService;
