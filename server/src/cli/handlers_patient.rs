// server/src/cli/handlers_patient.rs

use clinic::PatientService;
use models::{NewPatient, SessionContext};
use store::Database;

pub fn handle(db: &Database, session: &SessionContext, args: &str) -> String {
    let (sub, rest) = match args.split_once(' ') {
        Some((sub, rest)) => (sub, rest.trim()),
        None => (args, ""),
    };
    match sub {
        "" | "list" => list(db, session),
        "add" => add(db, session, rest),
        "delete" => delete(db, session, rest),
        other => format!("unknown patient subcommand '{other}'"),
    }
}

fn list(db: &Database, session: &SessionContext) -> String {
    match PatientService::new(db.clone()).list(session) {
        Ok(patients) if patients.is_empty() => "no patients on record".to_string(),
        Ok(patients) => patients
            .iter()
            .map(|p| {
                format!(
                    "{:>4}  {}  age {}  {}  {}  {}",
                    p.id, p.name, p.age, p.gender, p.phone, p.address
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Err(err) => err.to_string(),
    }
}

fn add(db: &Database, session: &SessionContext, spec: &str) -> String {
    let fields: Vec<&str> = spec.split(';').map(str::trim).collect();
    if fields.len() < 5 {
        return "usage: patient add <name>;<age>;<gender>;<phone>;<address>[;<user id>]"
            .to_string();
    }
    let age: i64 = match fields[1].parse() {
        Ok(age) => age,
        Err(_) => return format!("'{}' is not a valid age", fields[1]),
    };
    let linked_user_id = match fields.get(5) {
        Some(raw) if !raw.is_empty() => match raw.parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => return format!("'{raw}' is not a valid user id"),
        },
        _ => None,
    };

    let new = NewPatient {
        name: fields[0].to_string(),
        age,
        gender: fields[2].to_string(),
        phone: fields[3].to_string(),
        address: fields[4].to_string(),
        linked_user_id,
    };
    match PatientService::new(db.clone()).create(session, new) {
        Ok(created) if created.user_linked => format!(
            "patient {} added and linked to user {}",
            created.patient_id,
            linked_user_id.unwrap_or_default()
        ),
        Ok(created) => match linked_user_id {
            Some(user_id) => format!(
                "patient {} added, but user {user_id} does not exist; no account was linked",
                created.patient_id
            ),
            None => format!("patient {} added", created.patient_id),
        },
        Err(err) => err.to_string(),
    }
}

fn delete(db: &Database, session: &SessionContext, raw: &str) -> String {
    let patient_id: i64 = match raw.parse() {
        Ok(id) => id,
        Err(_) => return format!("'{raw}' is not a valid patient id"),
    };
    match PatientService::new(db.clone()).delete(session, patient_id) {
        Ok(()) => format!("patient {patient_id} deleted along with their appointments"),
        Err(err) => err.to_string(),
    }
}
