// models/src/medical/user.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ClinicError;

/// The three account roles. Anything unknown in storage is rejected at
/// load time rather than treated as a fourth role; a missing session is
/// what "guest" means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Receptionist,
    Patient,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Receptionist => "receptionist",
            Role::Patient => "patient",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ClinicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "receptionist" => Ok(Role::Receptionist),
            "patient" => Ok(Role::Patient),
            other => Err(ClinicError::Validation(format!("unknown role '{other}'"))),
        }
    }
}

/// A user account row. `password_hash` is an argon2id PHC string, never a
/// plaintext password. `patient_ref_id` is populated only for patient
/// accounts.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
    pub patient_ref_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::Role;
    use std::str::FromStr;

    #[test]
    fn should_round_trip_role_names() {
        for role in [Role::Admin, Role::Receptionist, Role::Patient] {
            assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
        }
    }

    #[test]
    fn should_accept_mixed_case_roles_from_storage() {
        assert_eq!(Role::from_str("Admin").unwrap(), Role::Admin);
        assert_eq!(Role::from_str(" RECEPTIONIST ").unwrap(), Role::Receptionist);
    }

    #[test]
    fn should_reject_unknown_role() {
        assert!(Role::from_str("guest").is_err());
    }
}
