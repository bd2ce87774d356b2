//! taskman CLI - manage a SQLite-backed to-do list from the terminal.

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{error, info, warn};
use std::fs;
use std::io::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;
use taskman::{StatusFilter, Task, TaskStore};
use tokio::io::AsyncBufReadExt;

mod cli;

use cli::{Cli, Command};

/// The task database lives in whatever directory the command runs from.
const DB_FILE: &str = "tasks.db";

fn setup_logging() -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskman")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("taskman.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(e) = setup_logging() {
        eprintln!("{} could not set up logging: {e}", "Warning:".yellow());
    }

    info!("Invocation: {:?}", std::env::args().collect::<Vec<_>>());

    let mut store = TaskStore::new(DB_FILE);
    if let Err(e) = store.open().await {
        error!("Could not open task database: {e:#}");
        eprintln!(
            "{} could not open the task database: {e:#}",
            "Error:".red().bold()
        );
        return ExitCode::from(1);
    }

    // One command per invocation. Whatever the command did, the store is
    // closed and the process reports success; only a failed open exits 1.
    if let Err(e) = dispatch(&store).await {
        error!("Command failed: {e:#}");
        eprintln!("{} {e:#}", "Error:".red().bold());
    }

    if let Err(e) = store.close().await {
        warn!("Close failed: {e:#}");
        eprintln!(
            "{} could not close the task database: {e}",
            "Warning:".yellow()
        );
    }

    ExitCode::SUCCESS
}

/// Parse argv and run the selected command. Parse failures (usage errors,
/// `--help`, `--version`) are rendered by clap and count as a handled
/// invocation; they never touch the store.
async fn dispatch(store: &TaskStore) -> Result<()> {
    match Cli::try_parse() {
        Ok(cli) => run(store, cli).await,
        Err(e) => {
            e.print().ok();
            Ok(())
        }
    }
}

async fn run(store: &TaskStore, cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        println!("No command given. Available commands: add, list, complete, delete, edit, ask");
        println!(
            "Try {} or {}.",
            "tm add \"Buy groceries\"".cyan(),
            "tm list".cyan()
        );
        return Ok(());
    };

    match command {
        Command::Add {
            description,
            due,
            priority,
        } => {
            let description = description.join(" ");
            let id = store
                .create_task(&description, due.as_deref(), priority.as_deref())
                .await?;

            println!(
                "{} Added task {}: {}",
                "✓".green(),
                id.to_string().cyan(),
                description
            );
            if let Some(due) = due {
                println!("   {} {}", "due:".dimmed(), due);
            }
            if let Some(priority) = priority {
                println!("   {} {}", "priority:".dimmed(), priority);
            }
        }

        Command::List { status } => {
            let tasks = store.list_tasks(status).await?;
            print_tasks(&tasks, status);
        }

        Command::Complete { id } => {
            if store.complete_task(id).await? {
                println!(
                    "{} Task {} marked as completed.",
                    "✓".green(),
                    id.to_string().cyan()
                );
            } else {
                println!("{} No task found with ID {}.", "✗".red(), id);
            }
        }

        Command::Delete { id } => {
            if store.delete_task(id).await? {
                println!("{} Task {} deleted.", "✓".green(), id.to_string().cyan());
            } else {
                println!("{} No task found with ID {}.", "✗".red(), id);
            }
        }

        Command::Edit { id, description } => {
            let description = description.join(" ");
            if store.edit_task(id, &description).await? {
                println!(
                    "{} Task {} description updated.",
                    "✓".green(),
                    id.to_string().cyan()
                );
            } else {
                println!("{} No task found with ID {}.", "✗".red(), id);
            }
        }

        Command::Ask => ask().await?,

        Command::Unknown(args) => {
            let name = args.first().map(String::as_str).unwrap_or_default();
            println!(
                "Unknown command {name:?}. Available commands: add, list, complete, delete, edit, ask"
            );
        }
    }

    Ok(())
}

fn print_tasks(tasks: &[Task], filter: Option<StatusFilter>) {
    if tasks.is_empty() {
        let hint = match filter {
            Some(filter) => format!("No {filter} tasks found."),
            None => "No tasks found. Add one with 'tm add \"My task\"'.".to_string(),
        };
        println!("{}", hint.dimmed());
        return;
    }

    println!("Your tasks:");
    for task in tasks {
        let marker = if task.completed {
            "[x]".green()
        } else {
            "[ ]".normal()
        };
        println!(
            "{}. {} {}",
            task.id.to_string().cyan(),
            marker,
            task.description
        );
        if let Some(due) = &task.due {
            println!("   {} {}", "due:".dimmed(), due);
        }
        if let Some(priority) = &task.priority {
            println!("   {} {}", "priority:".dimmed(), priority);
        }
    }
}

/// The one interactive command: reads a single line from stdin and greets
/// the user by name.
async fn ask() -> Result<()> {
    print!("What is your name? ");
    std::io::stdout().flush().context("Failed to flush stdout")?;

    let mut name = String::new();
    let mut input = tokio::io::BufReader::new(tokio::io::stdin());
    input
        .read_line(&mut name)
        .await
        .context("Failed to read from stdin")?;

    println!("Hello, {}! It's nice to meet you.", name.trim_end());
    Ok(())
}
