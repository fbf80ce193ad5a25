// models/src/medical/mod.rs

pub mod appointment;
pub mod doctor;
pub mod patient;
pub mod session;
pub mod user;

pub use appointment::{Appointment, AppointmentRow, BookingRequest};
pub use doctor::{Doctor, NewDoctor};
pub use patient::{NewPatient, Patient, PatientCreated};
pub use session::SessionContext;
pub use user::{Role, User};
