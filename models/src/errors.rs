// models/src/errors.rs
pub use thiserror::Error;
use serde::Serialize;

/// Error taxonomy shared by every crate in the workspace.
///
/// Every variant is terminal for the single operation that raised it;
/// nothing here ever aborts the process.
#[derive(Debug, Error, Clone, Serialize)]
pub enum ClinicError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("access denied: {0}")]
    AccessDenied(String),
    #[error("{entity} with id {id} was not found")]
    NotFound { entity: &'static str, id: i64 },
    #[error("username '{0}' is already taken")]
    UsernameTaken(String),
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("unrecognized date format: '{0}' (use YYYY-MM-DD, DD-MM-YYYY or MM/DD/YYYY)")]
    UnrecognizedDateFormat(String),
    #[error("storage error: {0}")]
    Storage(String),
}

pub type ClinicResult<T> = Result<T, ClinicError>;

impl ClinicError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ClinicError::Validation(msg.into())
    }

    pub fn denied(msg: impl Into<String>) -> Self {
        ClinicError::AccessDenied(msg.into())
    }

    pub fn not_found(entity: &'static str, id: i64) -> Self {
        ClinicError::NotFound { entity, id }
    }
}

impl From<rusqlite::Error> for ClinicError {
    fn from(err: rusqlite::Error) -> Self {
        ClinicError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::ClinicError;

    #[test]
    fn should_render_not_found_with_entity_and_id() {
        let err = ClinicError::not_found("patient", 42);
        assert_eq!(err.to_string(), "patient with id 42 was not found");
    }

    #[test]
    fn should_convert_sqlite_errors_to_storage() {
        let err: ClinicError = rusqlite::Error::InvalidQuery.into();
        assert!(matches!(err, ClinicError::Storage(_)));
    }

    #[test]
    fn should_serialize_as_tagged_json() {
        let json = serde_json::to_value(ClinicError::not_found("doctor", 7)).unwrap();
        assert_eq!(json["NotFound"]["entity"], "doctor");
        assert_eq!(json["NotFound"]["id"], 7);
    }
}
