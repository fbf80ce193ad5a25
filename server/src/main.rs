// server/src/main.rs

// Entry point for the clinic CLI. Argument parsing and the interactive
// shell live in the cli module.

use anyhow::Result;
use clinic_server::cli::cli::start_cli;

fn main() -> Result<()> {
    env_logger::init();
    start_cli()
}
