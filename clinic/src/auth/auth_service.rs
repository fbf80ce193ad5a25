// clinic/src/auth/auth_service.rs
//! Identity & session. Credentials are stored as argon2id PHC strings;
//! verification goes through `PasswordVerifier`, which compares in
//! constant time. A successful login yields a `SessionContext` that the
//! caller owns and passes into every subsequent operation.

use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::Argon2;
use log::{info, warn};

use models::{ClinicError, ClinicResult, Role, SessionContext};
use store::repository::users;
use store::Database;

/// Hashes a plaintext password with a fresh random salt.
pub fn hash_password(plain: &str) -> ClinicResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ClinicError::Storage(format!("password hashing failed: {e}")))
}

/// True when `plain` matches the stored PHC string. A malformed stored
/// hash verifies as false rather than erroring; the account is simply
/// unusable until re-provisioned.
pub fn verify_password(plain: &str, stored: &str) -> bool {
    match PasswordHash::new(stored) {
        Ok(parsed) => Argon2::default()
            .verify_password(plain.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => {
            warn!("stored password hash is not a valid PHC string");
            false
        }
    }
}

pub struct AuthService {
    db: Database,
}

impl AuthService {
    pub fn new(db: Database) -> Self {
        AuthService { db }
    }

    /// Looks the user up by username and verifies the password against
    /// the stored hash. Unknown username and wrong password are
    /// indistinguishable to the caller.
    pub fn authenticate(&self, username: &str, password: &str) -> ClinicResult<SessionContext> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(ClinicError::validation("username and password are required"));
        }

        let conn = self.db.connect()?;
        let Some(user) = users::find_by_username(&conn, username)? else {
            return Err(ClinicError::InvalidCredentials);
        };
        if !verify_password(password, &user.password_hash) {
            return Err(ClinicError::InvalidCredentials);
        }

        info!("user '{}' logged in as {}", user.username, user.role);
        let patient_id = match user.role {
            Role::Patient => user.patient_ref_id,
            _ => None,
        };
        Ok(SessionContext {
            user_id: user.id,
            username: user.username,
            role: user.role,
            patient_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Database;

    fn test_db() -> (tempfile::TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::at(dir.path().join("clinic.db"));
        db.initialize().unwrap();
        (dir, db)
    }

    fn add_user(db: &Database, username: &str, password: &str, role: Role, patient: Option<i64>) {
        let conn = db.connect().unwrap();
        let hash = hash_password(password).unwrap();
        users::insert_user(&conn, username, &hash, role, patient).unwrap();
    }

    #[test]
    fn hash_and_verify_round_trip() {
        let hash = hash_password("recep123").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("recep123", &hash));
        assert!(!verify_password("recep124", &hash));
        assert!(!verify_password("recep123", "plaintext-leftover"));
    }

    #[test]
    fn valid_credentials_yield_matching_session() {
        let (_dir, db) = test_db();
        add_user(&db, "p_arman", "p123", Role::Patient, Some(1));

        let session = AuthService::new(db).authenticate("p_arman", "p123").unwrap();
        assert_eq!(session.role, Role::Patient);
        assert_eq!(session.patient_id, Some(1));
        assert_eq!(session.username, "p_arman");
    }

    #[test]
    fn non_patient_session_carries_no_patient_id() {
        let (_dir, db) = test_db();
        // a stale patient_ref_id on an admin row must not leak into the session
        add_user(&db, "admin", "admin123", Role::Admin, Some(9));

        let session = AuthService::new(db).authenticate("admin", "admin123").unwrap();
        assert_eq!(session.patient_id, None);
    }

    #[test]
    fn bad_password_and_unknown_user_are_indistinguishable() {
        let (_dir, db) = test_db();
        add_user(&db, "reception", "recep123", Role::Receptionist, None);
        let auth = AuthService::new(db);

        let wrong = auth.authenticate("reception", "nope").unwrap_err();
        let unknown = auth.authenticate("ghost", "nope").unwrap_err();
        assert!(matches!(wrong, ClinicError::InvalidCredentials));
        assert!(matches!(unknown, ClinicError::InvalidCredentials));
    }

    #[test]
    fn empty_input_is_rejected_before_lookup() {
        let (_dir, db) = test_db();
        let auth = AuthService::new(db);
        assert!(matches!(
            auth.authenticate("", "x").unwrap_err(),
            ClinicError::Validation(_)
        ));
        assert!(matches!(
            auth.authenticate("admin", "").unwrap_err(),
            ClinicError::Validation(_)
        ));
    }
}
