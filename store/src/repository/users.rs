// store/src/repository/users.rs
use std::str::FromStr;

use rusqlite::{params, Connection};

use models::{ClinicResult, Role, User};

pub fn insert_user(
    conn: &Connection,
    username: &str,
    password_hash: &str,
    role: Role,
    patient_ref_id: Option<i64>,
) -> ClinicResult<i64> {
    conn.execute(
        "INSERT INTO users (username, password, role, patient_ref_id) VALUES (?1, ?2, ?3, ?4)",
        params![username, password_hash, role.as_str(), patient_ref_id],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_by_username(conn: &Connection, username: &str) -> ClinicResult<Option<User>> {
    let result = conn.query_row(
        "SELECT user_id, username, password, role, patient_ref_id \
         FROM users WHERE username = ?1",
        params![username],
        |row| {
            Ok(UserRow {
                id: row.get(0)?,
                username: row.get(1)?,
                password_hash: row.get(2)?,
                role: row.get(3)?,
                patient_ref_id: row.get(4)?,
            })
        },
    );
    match result {
        Ok(row) => Ok(Some(user_from_row(row)?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn username_taken(conn: &Connection, username: &str) -> ClinicResult<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM users WHERE username = ?1",
        params![username],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

pub fn count_users(conn: &Connection) -> ClinicResult<i64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
    Ok(count)
}

/// Points an existing user at a patient row. Returns the number of rows
/// updated (0 when the user id is unknown).
pub fn link_patient(conn: &Connection, user_id: i64, patient_id: i64) -> ClinicResult<usize> {
    let affected = conn.execute(
        "UPDATE users SET patient_ref_id = ?1 WHERE user_id = ?2",
        params![patient_id, user_id],
    )?;
    Ok(affected)
}

// Intermediate row, mapped before the role string is validated.
struct UserRow {
    id: i64,
    username: String,
    password_hash: String,
    role: String,
    patient_ref_id: Option<i64>,
}

fn user_from_row(row: UserRow) -> ClinicResult<User> {
    Ok(User {
        id: row.id,
        username: row.username,
        password_hash: row.password_hash,
        role: Role::from_str(&row.role)?,
        patient_ref_id: row.patient_ref_id,
    })
}
