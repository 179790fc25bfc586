//! Command-line front end for the task engine.
//!
//! # Responsibility
//! - Wire the caller-facing operations (add/list/done/edit/rm) to the core.
//! - Render the filtered view; the core exposes no output concerns.
//!
//! # Invariants
//! - Task text is trimmed here, before it reaches the store.
//! - Logging is best-effort; a logging failure never blocks an operation.

use clap::{Parser, Subcommand};
use quicktask_core::db::open_db;
use quicktask_core::{
    default_log_level, filter, init_logging, FilterMode, SqliteKvStore, TaskArchive, TaskId,
    TaskStore,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "quicktask", version, about = "Minimal durable todo list")]
struct Cli {
    /// Database file; defaults to the platform data directory.
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a new task.
    Add { text: String },
    /// List tasks, optionally filtered.
    List {
        /// One of all|active|completed; unrecognized values show all.
        #[arg(long, default_value = "all")]
        filter: String,
    },
    /// Toggle a task's completion flag.
    Done { id: String },
    /// Replace a task's text.
    Edit { id: String, text: String },
    /// Delete a task.
    Rm { id: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = default_log_dir() {
        let _ = init_logging(default_log_level(), &log_dir.to_string_lossy());
    }

    let db_path = match cli.db.or_else(default_db_path) {
        Some(path) => path,
        None => {
            eprintln!("quicktask: could not determine a data directory; pass --db PATH");
            return ExitCode::FAILURE;
        }
    };
    if let Some(parent) = db_path.parent() {
        if let Err(err) = std::fs::create_dir_all(parent) {
            eprintln!("quicktask: cannot create {}: {err}", parent.display());
            return ExitCode::FAILURE;
        }
    }

    let conn = match open_db(&db_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("quicktask: cannot open {}: {err}", db_path.display());
            return ExitCode::FAILURE;
        }
    };

    let mut store = TaskStore::new(TaskArchive::new(SqliteKvStore::new(&conn)));
    store.initialize();

    match cli.command {
        Command::Add { text } => match store.add(text.trim()) {
            Some(task) => {
                println!("added {}", task.id);
                ExitCode::SUCCESS
            }
            None => {
                eprintln!("quicktask: task text cannot be empty");
                ExitCode::FAILURE
            }
        },
        Command::List { filter: mode } => {
            let mode = FilterMode::parse(&mode);
            for task in filter::apply(store.tasks(), mode) {
                let marker = if task.completed { "x" } else { " " };
                println!("[{marker}] {}  {}", task.id, task.text);
            }
            ExitCode::SUCCESS
        }
        Command::Done { id } => {
            report_lookup(store.toggle_complete(&TaskId::from(id.as_str())), &id)
        }
        Command::Edit { id, text } => {
            let text = text.trim();
            if text.is_empty() {
                eprintln!("quicktask: task text cannot be empty");
                return ExitCode::FAILURE;
            }
            report_lookup(store.edit(&TaskId::from(id.as_str()), text), &id)
        }
        Command::Rm { id } => report_lookup(store.delete(&TaskId::from(id.as_str())), &id),
    }
}

fn report_lookup(found: bool, id: &str) -> ExitCode {
    if found {
        ExitCode::SUCCESS
    } else {
        eprintln!("quicktask: no task with id {id}");
        ExitCode::FAILURE
    }
}

fn default_db_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("quicktask").join("tasks.sqlite3"))
}

fn default_log_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("quicktask").join("logs"))
}
