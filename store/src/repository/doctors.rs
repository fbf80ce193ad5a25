// store/src/repository/doctors.rs
use rusqlite::{params, Connection};

use models::{ClinicResult, Doctor, NewDoctor};

pub fn insert_doctor(conn: &Connection, doctor: &NewDoctor) -> ClinicResult<i64> {
    conn.execute(
        "INSERT INTO doctors (name, specialization, phone) VALUES (?1, ?2, ?3)",
        params![doctor.name, doctor.specialization, doctor.phone],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_doctor(conn: &Connection, id: i64) -> ClinicResult<Option<Doctor>> {
    let result = conn.query_row(
        "SELECT doctor_id, name, specialization, phone FROM doctors WHERE doctor_id = ?1",
        params![id],
        map_doctor,
    );
    match result {
        Ok(doctor) => Ok(Some(doctor)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn doctor_exists(conn: &Connection, id: i64) -> ClinicResult<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM doctors WHERE doctor_id = ?1",
        params![id],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

pub fn list_doctors(conn: &Connection) -> ClinicResult<Vec<Doctor>> {
    let mut stmt = conn.prepare(
        "SELECT doctor_id, name, specialization, phone FROM doctors ORDER BY doctor_id DESC",
    )?;
    let rows = stmt.query_map([], map_doctor)?;
    let mut doctors = Vec::new();
    for row in rows {
        doctors.push(row?);
    }
    Ok(doctors)
}

pub fn delete_doctor(conn: &Connection, id: i64) -> ClinicResult<usize> {
    let affected = conn.execute("DELETE FROM doctors WHERE doctor_id = ?1", params![id])?;
    Ok(affected)
}

fn map_doctor(row: &rusqlite::Row<'_>) -> rusqlite::Result<Doctor> {
    Ok(Doctor {
        id: row.get(0)?,
        name: row.get(1)?,
        specialization: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        phone: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
    })
}
