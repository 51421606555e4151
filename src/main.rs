//! `roster` — command-line front end for a student roster file.
//!
//! # Usage
//!
//! ```text
//! roster [--file <path>] <command> [args]
//!
//! Commands:
//!   list                                     show all names in roster order
//!   add <name> <year> <email> <specialization>
//!   remove <email>
//!   find <email>
//!   by-spec <specialization>                 students in a specialization, by name
//!   min-age <n>                              students with year >= n, by name
//! ```
//!
//! Data file resolution order:
//!   1. `--file <path>` flag
//!   2. `$ROSTER_DATA_FILE`
//!   3. `data_file` in `config/default.toml`
//!   4. `~/.roster/students.json`

use std::path::{Path, PathBuf};
use std::process;

use roster::config;
use roster::error::AppError;
use roster::logger;
use roster::{Roster, Student};
use tracing::{debug, info};

// ── CLI arg parsing ────────────────────────────────────────────────────────

struct Args {
    file: Option<String>,
    command: Option<String>,
    rest: Vec<String>,
}

fn parse_args() -> Args {
    let mut file = None;
    let mut command = None;
    let mut rest = Vec::new();
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--file" | "-f" => {
                file = iter.next();
            }
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--" => {
                rest.extend(iter);
                break;
            }
            _ if command.is_none() => command = Some(arg),
            _ => rest.push(arg),
        }
    }

    Args { file, command, rest }
}

fn print_help() {
    eprintln!("usage: roster [--file <path>] <command> [args]");
    eprintln!();
    eprintln!("commands:");
    eprintln!("  list                                        show names in roster order");
    eprintln!("  add <name> <year> <email> <specialization>  append a student");
    eprintln!("  remove <email>                              remove a student");
    eprintln!("  find <email>                                show one student");
    eprintln!("  by-spec <specialization>                    filter by specialization");
    eprintln!("  min-age <n>                                 filter by minimum year");
    eprintln!();
    eprintln!("flags:");
    eprintln!("  --file, -f <path>   roster JSON file (default from config)");
    eprintln!("  --help, -h          print this help");
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    // .env is optional.
    let _ = dotenvy::dotenv();

    let config = config::load()?;
    logger::init(&config.log_level)?;

    let args = parse_args();
    let data_file = args.file.map(PathBuf::from).unwrap_or(config.data_file);
    info!(data_file = %data_file.display(), "config loaded");

    let Some(command) = args.command else {
        usage_error("missing command");
    };

    let mut roster = Roster::new();
    if data_file.exists() {
        roster.load_from_json(&data_file).await?;
    }
    debug!(count = roster.len(), "roster ready");

    match (command.as_str(), args.rest.as_slice()) {
        ("list", []) => println!("{}", roster.display_students()),
        ("add", [name, year, email, specialization]) => {
            let year = int_arg(year, "year");
            roster.add_student(Student::new(name.as_str(), year, email.as_str(), specialization.as_str()));
            save(&roster, &data_file).await?;
            info!(%email, count = roster.len(), "student added");
        }
        ("remove", [email]) => match roster.remove_student(email) {
            Some(removed) => {
                save(&roster, &data_file).await?;
                info!(email = %removed.email(), count = roster.len(), "student removed");
            }
            None => println!("no student with email {email}"),
        },
        ("find", [email]) => match roster.find_student(email) {
            Some(s) => print_student(s),
            None => println!("no student with email {email}"),
        },
        ("by-spec", [specialization]) => {
            roster.filter_by_specialization(specialization).into_iter().for_each(print_student);
        }
        ("min-age", [min_age]) => {
            let min_age = int_arg(min_age, "minimum age");
            roster.filter_by_min_age(min_age).into_iter().for_each(print_student);
        }
        (other, _) => usage_error(&format!("unknown command or wrong arguments: {other}")),
    }

    Ok(())
}

/// Parse a numeric command argument; a bad value is a usage error.
fn int_arg(value: &str, what: &str) -> i64 {
    match value.parse::<i64>() {
        Ok(n) => n,
        Err(e) => usage_error(&format!("invalid {what} '{value}': {e}")),
    }
}

fn usage_error(msg: &str) -> ! {
    eprintln!("error: {msg}");
    eprintln!();
    print_help();
    process::exit(2);
}

async fn save(roster: &Roster, path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    roster.save_to_json(path).await
}

fn print_student(s: &Student) {
    println!("{}\t{}\t{}\t{}", s.name(), s.year(), s.email(), s.specialization());
}
