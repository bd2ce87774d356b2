//! CLI argument parsing for taskman.

use clap::{Parser, Subcommand};
use taskman::StatusFilter;

#[derive(Parser)]
#[command(
    name = "tm",
    about = "Manage your to-do list from the terminal",
    version,
    after_help = "Examples:\n  \
        tm add \"Read a book\" --due 2025-05-30 --priority low\n  \
        tm list --status pending\n  \
        tm complete 1\n  \
        tm edit 1 \"Read two books\"\n  \
        tm delete 1\n\n\
        The task database is ./tasks.db; logs are written to: \
        ~/.local/share/taskman/logs/taskman.log"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Add a new task
    Add {
        /// Task description; every word that is not a flag value becomes
        /// part of it
        #[arg(required = true)]
        description: Vec<String>,

        /// Due date, stored as given (e.g. 2025-05-30)
        #[arg(long)]
        due: Option<String>,

        /// Priority, stored as given (e.g. low, high)
        #[arg(long)]
        priority: Option<String>,
    },

    /// List tasks
    List {
        /// Only show pending or completed tasks
        #[arg(long)]
        status: Option<StatusFilter>,
    },

    /// Mark a task as completed
    Complete {
        /// Task ID
        id: i64,
    },

    /// Delete a task permanently
    Delete {
        /// Task ID
        id: i64,
    },

    /// Replace a task's description
    Edit {
        /// Task ID
        id: i64,

        /// New description
        description: Vec<String>,
    },

    /// Prompt for your name and say hello
    Ask,

    /// Anything that is not a known command lands here
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}
