// server/src/cli/handlers_export.rs

// Exports go through the services so the same access rules apply as for
// listings; a patient exporting appointments gets only their own rows.

use std::fs;

use clinic::export::{csv, report};
use clinic::{AppointmentService, DoctorService, PatientService};
use models::SessionContext;
use store::Database;

pub fn handle_export(db: &Database, session: &SessionContext, args: &str) -> String {
    let (target, file) = split_target(args);
    let content = match target {
        "patients" => PatientService::new(db.clone())
            .list(session)
            .map(|rows| csv::patients_csv(&rows)),
        "doctors" => DoctorService::new(db.clone())
            .list(session)
            .map(|rows| csv::doctors_csv(&rows)),
        "appointments" => AppointmentService::new(db.clone())
            .list(session)
            .map(|rows| csv::appointments_csv(&rows)),
        "" => return "usage: export patients|doctors|appointments [file]".to_string(),
        other => return format!("cannot export '{other}'"),
    };
    deliver(content, file)
}

pub fn handle_report(db: &Database, session: &SessionContext, args: &str) -> String {
    let (target, file) = split_target(args);
    match target {
        "appointments" => {
            let content = AppointmentService::new(db.clone())
                .list(session)
                .map(|rows| report::appointments_report(&rows));
            deliver(content, file)
        }
        "" => "usage: report appointments [file]".to_string(),
        other => format!("no report for '{other}'"),
    }
}

fn split_target(args: &str) -> (&str, Option<&str>) {
    match args.split_once(' ') {
        Some((target, file)) => (target, Some(file.trim())),
        None => (args, None),
    }
}

fn deliver(content: Result<String, models::ClinicError>, file: Option<&str>) -> String {
    match content {
        Ok(text) => match file {
            Some(path) => match fs::write(path, &text) {
                Ok(()) => format!("wrote {path}"),
                Err(err) => format!("could not write {path}: {err}"),
            },
            None => text,
        },
        Err(err) => err.to_string(),
    }
}
