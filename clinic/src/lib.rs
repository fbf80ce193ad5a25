// clinic/src/lib.rs
//! The clinic core: identity & session, role-based access policy, domain
//! operations (patients, doctors, appointments, accounts), flexible
//! date/time parsing, seed data and result-set export.
//!
//! Every service holds a [`store::Database`] handle and opens a fresh
//! connection per operation. A [`models::SessionContext`] is passed
//! explicitly into each call; there is no ambient "current user".

pub mod account;
pub mod appointment;
pub mod auth;
pub mod datetime;
pub mod doctor;
pub mod export;
pub mod patient;
pub mod policy;
pub mod seed;

pub use account::account_service::AccountService;
pub use appointment::appointment_service::AppointmentService;
pub use auth::auth_service::AuthService;
pub use doctor::doctor_service::DoctorService;
pub use patient::patient_service::PatientService;
pub use policy::{authorize, decide, Action, Decision};
