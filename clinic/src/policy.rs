// clinic/src/policy.rs
//! Role-based access decisions. `decide` is a pure function of
//! (role, action, ownership match) and must run before any mutating
//! persistence call, never after.

use std::fmt;

use models::{ClinicError, ClinicResult, Role, SessionContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    AddPatient,
    ViewPatients,
    DeletePatient,
    AddDoctor,
    DeleteDoctor,
    ViewDoctors,
    CreatePatientUser,
    BookAppointment,
    ViewAppointments,
    EditAppointment,
    DeleteAppointment,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::AddPatient => "add patient",
            Action::ViewPatients => "view patients",
            Action::DeletePatient => "delete patient",
            Action::AddDoctor => "add doctor",
            Action::DeleteDoctor => "delete doctor",
            Action::ViewDoctors => "view doctors",
            Action::CreatePatientUser => "create patient user",
            Action::BookAppointment => "book appointment",
            Action::ViewAppointments => "view appointments",
            Action::EditAppointment => "edit appointment",
            Action::DeleteAppointment => "delete appointment",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

/// The policy table. `session` is `None` for a guest; `target_owner` is
/// the patient id owning the targeted record, when the action has one.
pub fn decide(
    session: Option<&SessionContext>,
    action: Action,
    target_owner: Option<i64>,
) -> Decision {
    let Some(session) = session else {
        return Decision::Deny;
    };
    match session.role {
        Role::Admin => Decision::Allow,
        Role::Receptionist => match action {
            Action::AddDoctor | Action::DeleteDoctor => Decision::Deny,
            _ => Decision::Allow,
        },
        Role::Patient => match action {
            // Listing is allowed; the listing itself is filtered to the
            // session's own rows by the appointment service.
            Action::ViewAppointments => Decision::Allow,
            Action::BookAppointment | Action::EditAppointment | Action::DeleteAppointment => {
                match target_owner {
                    Some(target) if session.owns_patient(target) => Decision::Allow,
                    _ => Decision::Deny,
                }
            }
            _ => Decision::Deny,
        },
    }
}

/// `decide` lifted into the error taxonomy.
pub fn authorize(
    session: Option<&SessionContext>,
    action: Action,
    target_owner: Option<i64>,
) -> ClinicResult<()> {
    match decide(session, action, target_owner) {
        Decision::Allow => Ok(()),
        Decision::Deny => {
            let who = session
                .map(|s| s.role.as_str())
                .unwrap_or("guest");
            Err(ClinicError::AccessDenied(format!(
                "role '{who}' may not {action}"
            )))
        }
    }
}
