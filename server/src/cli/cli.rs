// server/src/cli/cli.rs

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;
use store::Database;

#[derive(Parser, Debug)]
#[command(
    name = "clinic",
    version,
    about = "Single-clinic appointment system: patients, doctors, appointments and role-scoped accounts over an embedded SQLite database."
)]
pub struct CliArgs {
    /// SQLite database file. Defaults to $CLINIC_DB, then the per-user
    /// data directory.
    #[arg(long)]
    pub db: Option<PathBuf>,
}

pub fn start_cli() -> Result<()> {
    let args = CliArgs::parse();

    let db = match args.db {
        Some(path) => Database::at(path),
        None => Database::open_default(),
    };
    info!("using database at {}", db.path().display());

    db.initialize()?;
    if clinic::seed::seed_if_needed(&db)? {
        info!("fresh database, demo data seeded");
    }

    crate::cli::interactive::run(db)
}
