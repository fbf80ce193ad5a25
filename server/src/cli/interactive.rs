// server/src/cli/interactive.rs

// Interactive shell: an outer sign-in loop and an inner command loop.
// Every command is dispatched with the signed-in session passed
// explicitly; there is no ambient current user.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clinic::AuthService;
use models::SessionContext;
use store::Database;

use crate::cli::{
    handlers_appointment, handlers_doctor, handlers_export, handlers_patient, handlers_user,
};

const HELP: &str = "\
Commands (what you can run depends on your role):
  patients                                      list patients
  patient add <name>;<age>;<gender>;<phone>;<address>[;<user id>]
  patient delete <id>
  doctors                                       list doctors
  doctor add <name>;<specialization>;<phone>
  doctor delete <id>
  appointments                                  list appointments (patients see only their own)
  book <patient id>;<doctor id>;<date>;<time>[;<symptoms>]
  reschedule <appointment id>;<date>;<time>
  cancel <appointment id>
  account add <patient id>;<username>;<password>;<confirm password>
  export patients|doctors|appointments [file]   CSV to stdout or a file
  report appointments [file]                    paginated text report
  help                                          show this list
  logout                                        return to the sign-in prompt
  quit                                          exit";

pub enum Outcome {
    Output(String),
    Logout,
    Quit,
}

pub fn run(db: Database) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Clinic appointment system. Sign in to begin, or type 'quit'.");
    loop {
        let Some(username) = prompt(&mut lines, "username> ")? else {
            break;
        };
        if username == "quit" {
            break;
        }
        if username.is_empty() {
            continue;
        }
        let Some(password) = prompt(&mut lines, "password> ")? else {
            break;
        };

        match AuthService::new(db.clone()).authenticate(&username, &password) {
            Ok(session) => {
                println!(
                    "signed in as {} ({}). Type 'help' for commands.",
                    session.username, session.role
                );
                if !session_loop(&db, &session, &mut lines)? {
                    break;
                }
            }
            Err(err) => println!("{err}"),
        }
    }
    Ok(())
}

/// Returns false when the user asked to quit entirely rather than log out.
fn session_loop(
    db: &Database,
    session: &SessionContext,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<bool> {
    loop {
        let Some(line) = prompt(lines, "clinic> ")? else {
            return Ok(false);
        };
        if line.is_empty() {
            continue;
        }
        match dispatch(db, session, &line) {
            Outcome::Output(text) => println!("{text}"),
            Outcome::Logout => {
                println!("signed out");
                return Ok(true);
            }
            Outcome::Quit => return Ok(false),
        }
    }
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

pub fn dispatch(db: &Database, session: &SessionContext, line: &str) -> Outcome {
    let (head, rest) = match line.split_once(' ') {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };
    let output = match head {
        "help" => HELP.to_string(),
        "logout" => return Outcome::Logout,
        "quit" | "exit" => return Outcome::Quit,
        "patients" => handlers_patient::handle(db, session, "list"),
        "patient" => handlers_patient::handle(db, session, rest),
        "doctors" => handlers_doctor::handle(db, session, "list"),
        "doctor" => handlers_doctor::handle(db, session, rest),
        "appointments" => handlers_appointment::handle_list(db, session),
        "book" => handlers_appointment::handle_book(db, session, rest),
        "reschedule" => handlers_appointment::handle_reschedule(db, session, rest),
        "cancel" => handlers_appointment::handle_cancel(db, session, rest),
        "account" => handlers_user::handle(db, session, rest),
        "export" => handlers_export::handle_export(db, session, rest),
        "report" => handlers_export::handle_report(db, session, rest),
        other => format!("unknown command '{other}'; type 'help' for the list"),
    };
    Outcome::Output(output)
}
