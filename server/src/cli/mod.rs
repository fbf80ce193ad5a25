// server/src/cli/mod.rs

pub mod cli;
pub mod handlers_appointment;
pub mod handlers_doctor;
pub mod handlers_export;
pub mod handlers_patient;
pub mod handlers_user;
pub mod interactive;
