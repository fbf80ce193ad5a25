// store/src/repository/appointments.rs
use rusqlite::{params, Connection};

use models::{Appointment, AppointmentRow, ClinicResult};

pub fn insert_appointment(
    conn: &Connection,
    patient_id: i64,
    doctor_id: i64,
    date: &str,
    time: &str,
    symptoms: Option<&str>,
) -> ClinicResult<i64> {
    conn.execute(
        "INSERT INTO appointments (patient_id, doctor_id, date, time, symptoms) \
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![patient_id, doctor_id, date, time, symptoms],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_appointment(conn: &Connection, id: i64) -> ClinicResult<Option<Appointment>> {
    let result = conn.query_row(
        "SELECT appointment_id, patient_id, doctor_id, date, time, symptoms \
         FROM appointments WHERE appointment_id = ?1",
        params![id],
        |row| {
            Ok(Appointment {
                id: row.get(0)?,
                patient_id: row.get(1)?,
                doctor_id: row.get(2)?,
                date: row.get(3)?,
                time: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
                symptoms: row.get(5)?,
            })
        },
    );
    match result {
        Ok(appt) => Ok(Some(appt)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn update_schedule(conn: &Connection, id: i64, date: &str, time: &str) -> ClinicResult<usize> {
    let affected = conn.execute(
        "UPDATE appointments SET date = ?1, time = ?2 WHERE appointment_id = ?3",
        params![date, time, id],
    )?;
    Ok(affected)
}

pub fn delete_appointment(conn: &Connection, id: i64) -> ClinicResult<usize> {
    let affected = conn.execute(
        "DELETE FROM appointments WHERE appointment_id = ?1",
        params![id],
    )?;
    Ok(affected)
}

/// Appointments joined with patient and doctor names, newest first.
/// `owner` restricts the listing to one patient's rows; `None` lists all.
pub fn list_appointments(
    conn: &Connection,
    owner: Option<i64>,
) -> ClinicResult<Vec<AppointmentRow>> {
    let base = "SELECT a.appointment_id, a.patient_id, p.name AS patient_name, \
                d.name AS doctor_name, a.date, a.time, a.symptoms \
                FROM appointments a \
                LEFT JOIN patients p ON a.patient_id = p.patient_id \
                LEFT JOIN doctors d ON a.doctor_id = d.doctor_id";

    let mut rows = Vec::new();
    let map = |row: &rusqlite::Row<'_>| -> rusqlite::Result<AppointmentRow> {
        Ok(AppointmentRow {
            id: row.get(0)?,
            patient_id: row.get(1)?,
            patient_name: row.get(2)?,
            doctor_name: row.get(3)?,
            date: row.get(4)?,
            time: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
            symptoms: row.get(6)?,
        })
    };

    match owner {
        Some(patient_id) => {
            let sql = format!("{base} WHERE a.patient_id = ?1 ORDER BY a.appointment_id DESC");
            let mut stmt = conn.prepare(&sql)?;
            for row in stmt.query_map(params![patient_id], map)? {
                rows.push(row?);
            }
        }
        None => {
            let sql = format!("{base} ORDER BY a.appointment_id DESC");
            let mut stmt = conn.prepare(&sql)?;
            for row in stmt.query_map([], map)? {
                rows.push(row?);
            }
        }
    }
    Ok(rows)
}

pub fn count_for_patient(conn: &Connection, patient_id: i64) -> ClinicResult<i64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM appointments WHERE patient_id = ?1",
        params![patient_id],
        |row| row.get(0),
    )?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{doctors, patients};
    use crate::schema;
    use models::{NewDoctor, NewPatient};
    use rusqlite::Connection;

    fn test_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.pragma_update(None, "foreign_keys", true).unwrap();
        schema::init(&conn).unwrap();
        conn
    }

    fn seed_pair(conn: &Connection) -> (i64, i64) {
        let pid = patients::insert_patient(
            conn,
            &NewPatient {
                name: "Armaan Khandelwal".into(),
                age: 26,
                ..Default::default()
            },
        )
        .unwrap();
        let did = doctors::insert_doctor(
            conn,
            &NewDoctor {
                name: "Dr. Prashant Yadav".into(),
                specialization: "Cardiologist".into(),
                phone: String::new(),
            },
        )
        .unwrap();
        (pid, did)
    }

    #[test]
    fn should_join_names_in_listing() {
        let conn = test_db();
        let (pid, did) = seed_pair(&conn);
        insert_appointment(&conn, pid, did, "2025-02-15", "10:30 AM", Some("Chest pain")).unwrap();

        let rows = list_appointments(&conn, None).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].patient_name.as_deref(), Some("Armaan Khandelwal"));
        assert_eq!(rows[0].doctor_name.as_deref(), Some("Dr. Prashant Yadav"));
    }

    #[test]
    fn owner_filter_restricts_rows() {
        let conn = test_db();
        let (pid, did) = seed_pair(&conn);
        let other = patients::insert_patient(
            &conn,
            &NewPatient {
                name: "Zoya Rahman".into(),
                age: 19,
                ..Default::default()
            },
        )
        .unwrap();
        insert_appointment(&conn, pid, did, "2025-02-15", "10:30 AM", None).unwrap();
        insert_appointment(&conn, other, did, "2025-02-17", "04:45 PM", None).unwrap();

        let mine = list_appointments(&conn, Some(pid)).unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].patient_id, pid);
        assert_eq!(list_appointments(&conn, None).unwrap().len(), 2);
    }

    #[test]
    fn deleting_patient_cascades_to_appointments() {
        let conn = test_db();
        let (pid, did) = seed_pair(&conn);
        insert_appointment(&conn, pid, did, "2025-02-15", "10:30 AM", None).unwrap();
        insert_appointment(&conn, pid, did, "2025-02-18", "11:15 AM", None).unwrap();
        assert_eq!(count_for_patient(&conn, pid).unwrap(), 2);

        patients::delete_patient(&conn, pid).unwrap();
        assert_eq!(count_for_patient(&conn, pid).unwrap(), 0);
    }

    #[test]
    fn should_update_only_date_and_time() {
        let conn = test_db();
        let (pid, did) = seed_pair(&conn);
        let id =
            insert_appointment(&conn, pid, did, "2025-02-15", "10:30 AM", Some("Fever")).unwrap();

        assert_eq!(update_schedule(&conn, id, "2025-03-01", "09:00 AM").unwrap(), 1);
        let appt = get_appointment(&conn, id).unwrap().unwrap();
        assert_eq!(appt.date, "2025-03-01");
        assert_eq!(appt.time, "09:00 AM");
        assert_eq!(appt.symptoms.as_deref(), Some("Fever"));
    }
}
