// clinic/src/patient/patient_service.rs
use log::{info, warn};

use models::{ClinicError, ClinicResult, NewPatient, Patient, PatientCreated};
use store::repository::{patients, users};
use store::Database;

use crate::policy::{authorize, Action};

pub struct PatientService {
    db: Database,
}

impl PatientService {
    pub fn new(db: Database) -> Self {
        PatientService { db }
    }

    /// Creates a patient and, when `linked_user_id` is given, points that
    /// user account at the new row. A link target that does not exist is
    /// reported in the result instead of being silently dropped.
    pub fn create(
        &self,
        session: &models::SessionContext,
        new: NewPatient,
    ) -> ClinicResult<PatientCreated> {
        authorize(Some(session), Action::AddPatient, None)?;

        let name = new.name.trim();
        if name.is_empty() {
            return Err(ClinicError::validation("patient name is required"));
        }
        if new.age <= 0 {
            return Err(ClinicError::validation("age must be a positive number"));
        }

        let record = NewPatient {
            name: name.to_string(),
            ..new.clone()
        };
        let conn = self.db.connect()?;
        let patient_id = patients::insert_patient(&conn, &record)?;

        let mut user_linked = false;
        if let Some(user_id) = new.linked_user_id {
            if users::link_patient(&conn, user_id, patient_id)? > 0 {
                user_linked = true;
            } else {
                warn!(
                    "patient {patient_id} created, but user {user_id} does not exist; \
                     no account was linked"
                );
            }
        }

        info!("created patient {patient_id} ('{name}')");
        Ok(PatientCreated {
            patient_id,
            user_linked,
        })
    }

    pub fn list(&self, session: &models::SessionContext) -> ClinicResult<Vec<Patient>> {
        authorize(Some(session), Action::ViewPatients, None)?;
        let conn = self.db.connect()?;
        patients::list_patients(&conn)
    }

    /// Deletes the patient row; dependent appointments go with it via the
    /// schema's cascade.
    pub fn delete(&self, session: &models::SessionContext, patient_id: i64) -> ClinicResult<()> {
        authorize(Some(session), Action::DeletePatient, None)?;
        let conn = self.db.connect()?;
        if patients::delete_patient(&conn, patient_id)? == 0 {
            return Err(ClinicError::not_found("patient", patient_id));
        }
        info!("deleted patient {patient_id} (appointments cascaded)");
        Ok(())
    }
}
