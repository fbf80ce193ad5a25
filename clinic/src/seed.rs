// clinic/src/seed.rs
//! One-time demo data, inserted in a single transaction and gated on an
//! empty `users` table. Passwords are hashed like any other account's.

use log::info;

use models::{ClinicError, ClinicResult, NewDoctor, NewPatient, Role};
use store::repository::{appointments, doctors, patients, users};
use store::Database;

use crate::auth::hash_password;

/// Returns true when the demo rows were inserted, false when the
/// database already had users. Any failure mid-sequence rolls the whole
/// batch back.
pub fn seed_if_needed(db: &Database) -> ClinicResult<bool> {
    let mut conn = db.connect()?;

    let existing = users::count_users(&conn)?;
    if existing > 0 {
        info!("seed skipped, users table already has {existing} rows");
        return Ok(false);
    }

    let tx = conn.transaction().map_err(ClinicError::from)?;

    let pid1 = patients::insert_patient(
        &tx,
        &NewPatient {
            name: "Armaan Khandelwal".into(),
            age: 26,
            gender: "Male".into(),
            phone: "9991122334".into(),
            address: "Bhopal".into(),
            linked_user_id: None,
        },
    )?;
    let pid2 = patients::insert_patient(
        &tx,
        &NewPatient {
            name: "Zoya Rahman".into(),
            age: 19,
            gender: "Female".into(),
            phone: "8887766554".into(),
            address: "Bhopal".into(),
            linked_user_id: None,
        },
    )?;
    patients::insert_patient(
        &tx,
        &NewPatient {
            name: "Ajay Kumar".into(),
            age: 33,
            gender: "Male".into(),
            phone: "7878787878".into(),
            address: "Indore".into(),
            linked_user_id: None,
        },
    )?;

    let did1 = doctors::insert_doctor(
        &tx,
        &NewDoctor {
            name: "Dr. Ayesha Khan".into(),
            specialization: "General Physician".into(),
            phone: "9876543210".into(),
        },
    )?;
    let did2 = doctors::insert_doctor(
        &tx,
        &NewDoctor {
            name: "Dr. Prashant Yadav".into(),
            specialization: "Cardiologist".into(),
            phone: "9123456780".into(),
        },
    )?;
    let did3 = doctors::insert_doctor(
        &tx,
        &NewDoctor {
            name: "Dr. Neha Sharma".into(),
            specialization: "Dermatologist".into(),
            phone: "9988776655".into(),
        },
    )?;

    appointments::insert_appointment(&tx, pid1, did2, "2025-02-15", "10:30 AM", Some("Chest pain"))?;
    appointments::insert_appointment(&tx, pid2, did3, "2025-02-17", "04:45 PM", Some("Skin allergy"))?;
    appointments::insert_appointment(&tx, pid2, did1, "2025-02-18", "11:15 AM", Some("Fever & cough"))?;

    // demo credentials; hashed, never stored verbatim
    users::insert_user(&tx, "admin", &hash_password("admin123")?, Role::Admin, None)?;
    users::insert_user(
        &tx,
        "reception",
        &hash_password("recep123")?,
        Role::Receptionist,
        None,
    )?;
    users::insert_user(
        &tx,
        "p_arman",
        &hash_password("p123")?,
        Role::Patient,
        Some(pid1),
    )?;

    tx.commit().map_err(ClinicError::from)?;
    info!("seed data inserted (3 patients, 3 doctors, 3 appointments, 3 users)");
    Ok(true)
}
