// server/src/cli/handlers_doctor.rs

use clinic::DoctorService;
use models::{NewDoctor, SessionContext};
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
        other => format!("unknown doctor subcommand '{other}'"),
    }
}

fn list(db: &Database, session: &SessionContext) -> String {
    match DoctorService::new(db.clone()).list(session) {
        Ok(doctors) if doctors.is_empty() => "no doctors on record".to_string(),
        Ok(doctors) => doctors
            .iter()
            .map(|d| format!("{:>4}  {}  {}  {}", d.id, d.name, d.specialization, d.phone))
            .collect::<Vec<_>>()
            .join("\n"),
        Err(err) => err.to_string(),
    }
}

fn add(db: &Database, session: &SessionContext, spec: &str) -> String {
    let fields: Vec<&str> = spec.split(';').map(str::trim).collect();
    if fields.len() < 3 {
        return "usage: doctor add <name>;<specialization>;<phone>".to_string();
    }
    let new = NewDoctor {
        name: fields[0].to_string(),
        specialization: fields[1].to_string(),
        phone: fields[2].to_string(),
    };
    match DoctorService::new(db.clone()).create(session, new) {
        Ok(doctor_id) => format!("doctor {doctor_id} added"),
        Err(err) => err.to_string(),
    }
}

fn delete(db: &Database, session: &SessionContext, raw: &str) -> String {
    let doctor_id: i64 = match raw.parse() {
        Ok(id) => id,
        Err(_) => return format!("'{raw}' is not a valid doctor id"),
    };
    match DoctorService::new(db.clone()).delete(session, doctor_id) {
        Ok(()) => format!("doctor {doctor_id} deleted along with their appointments"),
        Err(err) => err.to_string(),
    }
}
