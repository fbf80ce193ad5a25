// models/src/lib.rs

pub mod errors;
pub mod medical;

// Re-export the types virtually every caller needs.
pub use errors::{ClinicError, ClinicResult};
pub use medical::appointment::{Appointment, AppointmentRow, BookingRequest};
pub use medical::doctor::{Doctor, NewDoctor};
pub use medical::patient::{NewPatient, Patient, PatientCreated};
pub use medical::session::SessionContext;
pub use medical::user::{Role, User};
