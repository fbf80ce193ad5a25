// server/src/cli/handlers_user.rs

use clinic::AccountService;
use models::SessionContext;
use store::Database;

pub fn handle(db: &Database, session: &SessionContext, args: &str) -> String {
    let (sub, rest) = match args.split_once(' ') {
        Some((sub, rest)) => (sub, rest.trim()),
        None => (args, ""),
    };
    match sub {
        "add" => add(db, session, rest),
        other => format!("unknown account subcommand '{other}'"),
    }
}

fn add(db: &Database, session: &SessionContext, spec: &str) -> String {
    let fields: Vec<&str> = spec.split(';').map(str::trim).collect();
    if fields.len() < 4 {
        return "usage: account add <patient id>;<username>;<password>;<confirm password>"
            .to_string();
    }
    let patient_id: i64 = match fields[0].parse() {
        Ok(id) => id,
        Err(_) => return format!("'{}' is not a valid patient id", fields[0]),
    };
    match AccountService::new(db.clone()).create_patient_user(
        session, patient_id, fields[1], fields[2], fields[3],
    ) {
        Ok(user_id) => format!("patient account '{}' created (user {user_id})", fields[1]),
        Err(err) => err.to_string(),
    }
}
