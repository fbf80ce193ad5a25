// server/src/cli/handlers_appointment.rs

use clinic::datetime::parse_flexible_time;
use clinic::AppointmentService;
use models::{BookingRequest, SessionContext};
use store::Database;

pub fn handle_list(db: &Database, session: &SessionContext) -> String {
    match AppointmentService::new(db.clone()).list(session) {
        Ok(rows) if rows.is_empty() => "no appointments on record".to_string(),
        Ok(rows) => rows
            .iter()
            .map(|r| {
                format!(
                    "{:>4}  {}  with {}  on {} {}  {}",
                    r.id,
                    r.patient_name.as_deref().unwrap_or("-"),
                    r.doctor_name.as_deref().unwrap_or("-"),
                    r.date,
                    r.time,
                    r.symptoms.as_deref().unwrap_or(""),
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Err(err) => err.to_string(),
    }
}

pub fn handle_book(db: &Database, session: &SessionContext, spec: &str) -> String {
    let fields: Vec<&str> = spec.split(';').map(str::trim).collect();
    if fields.len() < 4 {
        return "usage: book <patient id>;<doctor id>;<date>;<time>[;<symptoms>]".to_string();
    }
    let patient_id: i64 = match fields[0].parse() {
        Ok(id) => id,
        Err(_) => return format!("'{}' is not a valid patient id", fields[0]),
    };
    let doctor_id: i64 = match fields[1].parse() {
        Ok(id) => id,
        Err(_) => return format!("'{}' is not a valid doctor id", fields[1]),
    };
    let time = fields[3].to_string();
    let note = if parse_flexible_time(&time).is_none() {
        format!("\nnote: '{time}' is not a recognized time of day; stored as entered")
    } else {
        String::new()
    };

    let request = BookingRequest {
        patient_id,
        doctor_id,
        date: fields[2].to_string(),
        time,
        symptoms: fields
            .get(4)
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string()),
    };
    match AppointmentService::new(db.clone()).book(session, request) {
        Ok(appointment_id) => format!("appointment {appointment_id} booked{note}"),
        Err(err) => err.to_string(),
    }
}

pub fn handle_reschedule(db: &Database, session: &SessionContext, spec: &str) -> String {
    let fields: Vec<&str> = spec.split(';').map(str::trim).collect();
    if fields.len() < 3 {
        return "usage: reschedule <appointment id>;<date>;<time>".to_string();
    }
    let appointment_id: i64 = match fields[0].parse() {
        Ok(id) => id,
        Err(_) => return format!("'{}' is not a valid appointment id", fields[0]),
    };
    match AppointmentService::new(db.clone()).edit(session, appointment_id, fields[1], fields[2]) {
        Ok(()) => format!("appointment {appointment_id} rescheduled"),
        Err(err) => err.to_string(),
    }
}

pub fn handle_cancel(db: &Database, session: &SessionContext, raw: &str) -> String {
    let appointment_id: i64 = match raw.parse() {
        Ok(id) => id,
        Err(_) => return format!("'{raw}' is not a valid appointment id"),
    };
    match AppointmentService::new(db.clone()).delete(session, appointment_id) {
        Ok(()) => format!("appointment {appointment_id} cancelled"),
        Err(err) => err.to_string(),
    }
}
