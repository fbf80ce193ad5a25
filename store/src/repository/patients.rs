// store/src/repository/patients.rs
use rusqlite::{params, Connection};

use models::{ClinicResult, NewPatient, Patient};

pub fn insert_patient(conn: &Connection, patient: &NewPatient) -> ClinicResult<i64> {
    conn.execute(
        "INSERT INTO patients (name, age, gender, phone, address) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            patient.name,
            patient.age,
            patient.gender,
            patient.phone,
            patient.address,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_patient(conn: &Connection, id: i64) -> ClinicResult<Option<Patient>> {
    let result = conn.query_row(
        "SELECT patient_id, name, age, gender, phone, address \
         FROM patients WHERE patient_id = ?1",
        params![id],
        map_patient,
    );
    match result {
        Ok(patient) => Ok(Some(patient)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn patient_exists(conn: &Connection, id: i64) -> ClinicResult<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM patients WHERE patient_id = ?1",
        params![id],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

pub fn list_patients(conn: &Connection) -> ClinicResult<Vec<Patient>> {
    let mut stmt = conn.prepare(
        "SELECT patient_id, name, age, gender, phone, address \
         FROM patients ORDER BY patient_id DESC",
    )?;
    let rows = stmt.query_map([], map_patient)?;
    let mut patients = Vec::new();
    for row in rows {
        patients.push(row?);
    }
    Ok(patients)
}

/// Returns the number of rows removed (0 when the id is unknown).
/// Dependent appointments go with the patient via `ON DELETE CASCADE`.
pub fn delete_patient(conn: &Connection, id: i64) -> ClinicResult<usize> {
    let affected = conn.execute("DELETE FROM patients WHERE patient_id = ?1", params![id])?;
    Ok(affected)
}

fn map_patient(row: &rusqlite::Row<'_>) -> rusqlite::Result<Patient> {
    Ok(Patient {
        id: row.get(0)?,
        name: row.get(1)?,
        // age is nullable in legacy rows; treat missing as 0
        age: row.get::<_, Option<i64>>(2)?.unwrap_or(0),
        gender: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        phone: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        address: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
    })
}
