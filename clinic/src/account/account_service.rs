// clinic/src/account/account_service.rs
use log::info;

use models::{ClinicError, ClinicResult, Role, SessionContext};
use store::repository::{patients, users};
use store::Database;

use crate::auth::hash_password;
use crate::policy::{authorize, Action};

pub struct AccountService {
    db: Database,
}

impl AccountService {
    pub fn new(db: Database) -> Self {
        AccountService { db }
    }

    /// Creates a login for an existing patient. Admin/receptionist only;
    /// the role of the new account is always `patient`.
    pub fn create_patient_user(
        &self,
        session: &SessionContext,
        patient_id: i64,
        username: &str,
        password: &str,
        confirm: &str,
    ) -> ClinicResult<i64> {
        authorize(Some(session), Action::CreatePatientUser, None)?;

        let username = username.trim();
        if username.is_empty() || password.is_empty() || confirm.is_empty() {
            return Err(ClinicError::validation("all fields are required"));
        }
        if password != confirm {
            return Err(ClinicError::validation("passwords do not match"));
        }

        let conn = self.db.connect()?;
        if !patients::patient_exists(&conn, patient_id)? {
            return Err(ClinicError::not_found("patient", patient_id));
        }
        if users::username_taken(&conn, username)? {
            return Err(ClinicError::UsernameTaken(username.to_string()));
        }

        let hash = hash_password(password)?;
        let user_id = users::insert_user(&conn, username, &hash, Role::Patient, Some(patient_id))?;
        info!("created patient user {user_id} ('{username}') for patient {patient_id}");
        Ok(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthService;
    use models::NewPatient;
    use store::repository::patients as pat_repo;

    fn fixture() -> (tempfile::TempDir, Database, i64) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::at(dir.path().join("clinic.db"));
        db.initialize().unwrap();
        let pid = {
            let conn = db.connect().unwrap();
            pat_repo::insert_patient(
                &conn,
                &NewPatient {
                    name: "Armaan Khandelwal".into(),
                    age: 26,
                    ..Default::default()
                },
            )
            .unwrap()
        };
        (dir, db, pid)
    }

    fn receptionist() -> SessionContext {
        SessionContext {
            user_id: 2,
            username: "reception".into(),
            role: Role::Receptionist,
            patient_id: None,
        }
    }

    #[test]
    fn created_account_can_log_in_as_its_patient() {
        let (_dir, db, pid) = fixture();
        let service = AccountService::new(db.clone());
        service
            .create_patient_user(&receptionist(), pid, "p_arman", "p123", "p123")
            .unwrap();

        let session = AuthService::new(db).authenticate("p_arman", "p123").unwrap();
        assert_eq!(session.role, Role::Patient);
        assert_eq!(session.patient_id, Some(pid));
    }

    #[test]
    fn duplicate_username_is_a_conflict_and_inserts_nothing() {
        let (_dir, db, pid) = fixture();
        let service = AccountService::new(db.clone());
        service
            .create_patient_user(&receptionist(), pid, "p_arman", "p123", "p123")
            .unwrap();

        let err = service
            .create_patient_user(&receptionist(), pid, "p_arman", "other", "other")
            .unwrap_err();
        assert!(matches!(err, ClinicError::UsernameTaken(_)));

        let conn = db.connect().unwrap();
        assert_eq!(users::count_users(&conn).unwrap(), 1);
    }

    #[test]
    fn password_mismatch_is_rejected_before_any_lookup() {
        let (_dir, db, pid) = fixture();
        let service = AccountService::new(db);
        let err = service
            .create_patient_user(&receptionist(), pid, "p_arman", "p123", "p124")
            .unwrap_err();
        assert!(matches!(err, ClinicError::Validation(_)));
    }

    #[test]
    fn patient_must_exist_before_an_account_is_created() {
        let (_dir, db, _) = fixture();
        let service = AccountService::new(db.clone());
        let err = service
            .create_patient_user(&receptionist(), 999, "p_ghost", "x", "x")
            .unwrap_err();
        assert!(matches!(err, ClinicError::NotFound { entity: "patient", .. }));

        let conn = db.connect().unwrap();
        assert_eq!(users::count_users(&conn).unwrap(), 0);
    }

    #[test]
    fn patient_role_may_not_create_accounts() {
        let (_dir, db, pid) = fixture();
        let service = AccountService::new(db);
        let patient = SessionContext {
            user_id: 9,
            username: "p_arman".into(),
            role: Role::Patient,
            patient_id: Some(pid),
        };
        assert!(matches!(
            service
                .create_patient_user(&patient, pid, "p_new", "x", "x")
                .unwrap_err(),
            ClinicError::AccessDenied(_)
        ));
    }
}
