// store/src/schema.rs
use rusqlite::Connection;

use models::ClinicResult;

/// Idempotent DDL, executed in dependency order. Appointments cascade on
/// both of their foreign keys; the cascade is the only deletion path for
/// appointment rows besides an explicit delete.
const DDL: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS patients (
        patient_id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        age INTEGER,
        gender TEXT,
        phone TEXT,
        address TEXT
    )",
    "CREATE TABLE IF NOT EXISTS doctors (
        doctor_id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        specialization TEXT,
        phone TEXT
    )",
    "CREATE TABLE IF NOT EXISTS appointments (
        appointment_id INTEGER PRIMARY KEY AUTOINCREMENT,
        patient_id INTEGER NOT NULL,
        doctor_id INTEGER NOT NULL,
        date TEXT NOT NULL,
        time TEXT,
        symptoms TEXT,
        FOREIGN KEY(patient_id) REFERENCES patients(patient_id) ON DELETE CASCADE,
        FOREIGN KEY(doctor_id) REFERENCES doctors(doctor_id) ON DELETE CASCADE
    )",
    "CREATE TABLE IF NOT EXISTS users (
        user_id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT UNIQUE NOT NULL,
        password TEXT NOT NULL,
        role TEXT NOT NULL,
        patient_ref_id INTEGER
    )",
];

pub fn init(conn: &Connection) -> ClinicResult<()> {
    for statement in DDL {
        conn.execute(statement, [])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::init;
    use rusqlite::Connection;

    #[test]
    fn should_be_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        init(&conn).unwrap();
        init(&conn).unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' \
                 AND name NOT LIKE 'sqlite_%'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 4);
    }
}
