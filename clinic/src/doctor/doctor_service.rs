// clinic/src/doctor/doctor_service.rs
use log::info;

use models::{ClinicError, ClinicResult, Doctor, NewDoctor, SessionContext};
use store::repository::doctors;
use store::Database;

use crate::policy::{authorize, Action};

pub struct DoctorService {
    db: Database,
}

impl DoctorService {
    pub fn new(db: Database) -> Self {
        DoctorService { db }
    }

    /// Admin only.
    pub fn create(&self, session: &SessionContext, new: NewDoctor) -> ClinicResult<i64> {
        authorize(Some(session), Action::AddDoctor, None)?;

        let name = new.name.trim();
        let specialization = new.specialization.trim();
        if name.is_empty() || specialization.is_empty() {
            return Err(ClinicError::validation(
                "doctor name and specialization are required",
            ));
        }

        let conn = self.db.connect()?;
        let doctor_id = doctors::insert_doctor(
            &conn,
            &NewDoctor {
                name: name.to_string(),
                specialization: specialization.to_string(),
                phone: new.phone.trim().to_string(),
            },
        )?;
        info!("created doctor {doctor_id} ('{name}')");
        Ok(doctor_id)
    }

    pub fn list(&self, session: &SessionContext) -> ClinicResult<Vec<Doctor>> {
        authorize(Some(session), Action::ViewDoctors, None)?;
        let conn = self.db.connect()?;
        doctors::list_doctors(&conn)
    }

    /// Admin only; dependent appointments are removed by the cascade.
    pub fn delete(&self, session: &SessionContext, doctor_id: i64) -> ClinicResult<()> {
        authorize(Some(session), Action::DeleteDoctor, None)?;
        let conn = self.db.connect()?;
        if doctors::delete_doctor(&conn, doctor_id)? == 0 {
            return Err(ClinicError::not_found("doctor", doctor_id));
        }
        info!("deleted doctor {doctor_id} (appointments cascaded)");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::Role;

    fn test_db() -> (tempfile::TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::at(dir.path().join("clinic.db"));
        db.initialize().unwrap();
        (dir, db)
    }

    fn session(role: Role) -> SessionContext {
        SessionContext {
            user_id: 1,
            username: "u".into(),
            role,
            patient_id: None,
        }
    }

    fn dr_khan() -> NewDoctor {
        NewDoctor {
            name: "Dr. Ayesha Khan".into(),
            specialization: "General Physician".into(),
            phone: "9876543210".into(),
        }
    }

    #[test]
    fn only_admin_may_add_or_delete_doctors() {
        let (_dir, db) = test_db();
        let service = DoctorService::new(db);

        let id = service.create(&session(Role::Admin), dr_khan()).unwrap();
        assert!(matches!(
            service.create(&session(Role::Receptionist), dr_khan()).unwrap_err(),
            ClinicError::AccessDenied(_)
        ));
        assert!(matches!(
            service.delete(&session(Role::Receptionist), id).unwrap_err(),
            ClinicError::AccessDenied(_)
        ));
        service.delete(&session(Role::Admin), id).unwrap();
    }

    #[test]
    fn receptionist_may_view_doctors() {
        let (_dir, db) = test_db();
        let service = DoctorService::new(db);
        service.create(&session(Role::Admin), dr_khan()).unwrap();
        let listed = service.list(&session(Role::Receptionist)).unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[test]
    fn specialization_is_required() {
        let (_dir, db) = test_db();
        let service = DoctorService::new(db);
        let mut incomplete = dr_khan();
        incomplete.specialization = "  ".into();
        assert!(matches!(
            service.create(&session(Role::Admin), incomplete).unwrap_err(),
            ClinicError::Validation(_)
        ));
    }

    #[test]
    fn delete_of_unknown_doctor_is_not_found() {
        let (_dir, db) = test_db();
        let service = DoctorService::new(db);
        assert!(matches!(
            service.delete(&session(Role::Admin), 404).unwrap_err(),
            ClinicError::NotFound { entity: "doctor", .. }
        ));
    }
}
