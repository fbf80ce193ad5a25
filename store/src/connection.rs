// store/src/connection.rs
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use rusqlite::Connection;

use models::{ClinicError, ClinicResult};

use crate::schema;

/// Handle on the database file location. Cheap to clone; a fresh
/// connection is opened per operation and dropped when the operation
/// finishes, succeed or fail.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Database at an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Database { path: path.into() }
    }

    /// Database at the default location: `$CLINIC_DB` when set, otherwise
    /// a per-user data directory (`LOCALAPPDATA` on Windows,
    /// `XDG_DATA_HOME`/`~/.local/share` elsewhere).
    pub fn open_default() -> Self {
        Database { path: default_path() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens one connection with foreign-key enforcement on. Parent
    /// directories are created on first use.
    pub fn connect(&self) -> ClinicResult<Connection> {
        if let Some(dir) = self.path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| {
                    ClinicError::Storage(format!(
                        "could not create db folder {}: {e}",
                        dir.display()
                    ))
                })?;
                info!("created database folder {}", dir.display());
            }
        }
        let conn = Connection::open(&self.path)?;
        conn.pragma_update(None, "foreign_keys", true)?;
        debug!("opened connection to {}", self.path.display());
        Ok(conn)
    }

    /// Creates the four tables if they do not exist. Safe to call on
    /// every startup.
    pub fn initialize(&self) -> ClinicResult<()> {
        let conn = self.connect()?;
        schema::init(&conn)
    }
}

fn default_path() -> PathBuf {
    if let Some(explicit) = env::var_os("CLINIC_DB") {
        return PathBuf::from(explicit);
    }
    let base = env::var_os("LOCALAPPDATA")
        .map(PathBuf::from)
        .or_else(|| env::var_os("XDG_DATA_HOME").map(PathBuf::from))
        .or_else(|| {
            env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("share"))
        })
        .unwrap_or_else(|| PathBuf::from("."));
    base.join("clinic-appointments").join("db").join("clinic.db")
}

#[cfg(test)]
mod tests {
    use super::Database;

    #[test]
    fn should_create_missing_folders_and_schema() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::at(dir.path().join("nested").join("clinic.db"));
        db.initialize().unwrap();

        let conn = db.connect().unwrap();
        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' \
                 AND name IN ('patients','doctors','appointments','users')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 4);
    }

    #[test]
    fn connections_enforce_foreign_keys() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::at(dir.path().join("clinic.db"));
        db.initialize().unwrap();

        let conn = db.connect().unwrap();
        let enabled: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }
}
