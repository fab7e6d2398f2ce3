//! Command-line front end for `dogdb_core`.
//!
//! # Responsibility
//! - Own the connection lifecycle: open at startup, drop at exit.
//! - Map subcommands onto repository operations.
//! - Print dogs as one JSON object per line.

use clap::{Parser, Subcommand};
use dogdb_core::{
    default_log_level, init_logging, open_db, open_db_in_memory, Dog, DogId, DogRepository,
    LogLevel, SqliteDogRepository,
};
use log::info;
use rusqlite::Connection;
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

type CliResult<T> = Result<T, Box<dyn Error>>;

#[derive(Debug, Parser)]
#[command(name = "dogdb", version, about = "Store and look up dog records in SQLite")]
struct Cli {
    /// SQLite database file. Uses a throwaway in-memory database when omitted.
    #[arg(long, env = "DOGDB_PATH", global = true)]
    db: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error.
    #[arg(long, env = "DOGDB_LOG_LEVEL", global = true)]
    log_level: Option<LogLevel>,

    /// Absolute directory for rolling log files. Logging is off when omitted.
    #[arg(long, env = "DOGDB_LOG_DIR", global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create the dogs table if missing
    Init,
    /// Drop the dogs table if present
    Drop,
    /// Insert a new dog
    Create { name: String, breed: String },
    /// Print every dog
    List,
    /// Print the dog with the given id
    Find { id: DogId },
    /// Print one dog with the given name
    FindByName { name: String },
    /// Print the dog matching name and breed, inserting it if missing
    FindOrCreate { name: String, breed: String },
    /// Change name and/or breed of an existing dog
    Update {
        id: DogId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        breed: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = setup_logging(&cli) {
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }

    let result = connect(&cli).and_then(|conn| {
        let stdout = io::stdout();
        execute(&conn, cli.command, &mut stdout.lock())
    });

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(cli: &Cli) -> CliResult<()> {
    let Some(log_dir) = cli.log_dir.as_deref() else {
        return Ok(());
    };
    let level = cli.log_level.map_or_else(default_log_level, LogLevel::as_str);
    init_logging(level, log_dir)?;
    Ok(())
}

fn connect(cli: &Cli) -> CliResult<Connection> {
    let conn = match &cli.db {
        Some(path) => open_db(path)?,
        None => open_db_in_memory()?,
    };
    Ok(conn)
}

/// Runs one subcommand. Returns `false` when the requested dog does not exist.
fn execute(conn: &Connection, command: Command, out: &mut impl Write) -> CliResult<bool> {
    let repo = SqliteDogRepository::new(conn);
    info!("event=cli_command module=cli status=start command={}", command_name(&command));

    let found = match command {
        Command::Init => {
            repo.create_table()?;
            true
        }
        Command::Drop => {
            repo.drop_table()?;
            true
        }
        Command::Create { name, breed } => {
            print_dog(out, &repo.create(&name, &breed)?)?;
            true
        }
        Command::List => {
            for dog in repo.all()? {
                print_dog(out, &dog)?;
            }
            true
        }
        Command::Find { id } => print_optional(out, repo.find(id)?)?,
        Command::FindByName { name } => print_optional(out, repo.find_by_name(&name)?)?,
        Command::FindOrCreate { name, breed } => {
            print_dog(out, &repo.find_or_create_by(&name, &breed)?)?;
            true
        }
        Command::Update { id, name, breed } => {
            let Some(mut dog) = repo.find(id)? else {
                return Ok(false);
            };
            if let Some(name) = name {
                dog.name = name;
            }
            if let Some(breed) = breed {
                dog.breed = breed;
            }
            print_dog(out, repo.save(&mut dog)?)?;
            true
        }
    };

    Ok(found)
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Init => "init",
        Command::Drop => "drop",
        Command::Create { .. } => "create",
        Command::List => "list",
        Command::Find { .. } => "find",
        Command::FindByName { .. } => "find-by-name",
        Command::FindOrCreate { .. } => "find-or-create",
        Command::Update { .. } => "update",
    }
}

fn print_optional(out: &mut impl Write, dog: Option<Dog>) -> CliResult<bool> {
    match dog {
        Some(dog) => {
            print_dog(out, &dog)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

fn print_dog(out: &mut impl Write, dog: &Dog) -> CliResult<()> {
    serde_json::to_writer(&mut *out, dog)?;
    writeln!(out)?;
    Ok(())
}
