// models/src/medical/session.rs
use serde::{Deserialize, Serialize};

use super::user::Role;

/// The authenticated identity for one active login.
///
/// Created only by a successful `authenticate` and passed explicitly into
/// every operation; dropping it is logout. There is deliberately no
/// process-global "current user".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContext {
    pub user_id: i64,
    pub username: String,
    pub role: Role,
    /// Linked patient id; `Some` only for `Role::Patient` accounts that
    /// have been tied to a patient row.
    pub patient_id: Option<i64>,
}

impl SessionContext {
    /// True when this session owns the given patient id.
    pub fn owns_patient(&self, patient_id: i64) -> bool {
        self.role == Role::Patient && self.patient_id == Some(patient_id)
    }
}

#[cfg(test)]
mod tests {
    use super::SessionContext;
    use crate::medical::user::Role;

    fn patient_session(patient_id: Option<i64>) -> SessionContext {
        SessionContext {
            user_id: 7,
            username: "p_arman".into(),
            role: Role::Patient,
            patient_id,
        }
    }

    #[test]
    fn should_own_only_the_linked_patient() {
        let session = patient_session(Some(3));
        assert!(session.owns_patient(3));
        assert!(!session.owns_patient(4));
    }

    #[test]
    fn unlinked_patient_session_owns_nothing() {
        assert!(!patient_session(None).owns_patient(3));
    }
}
