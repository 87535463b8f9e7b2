//! Top-level CLI definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::add::AddArgs;
use super::delete::DeleteArgs;
use super::done::DoneArgs;
use super::edit::EditArgs;
use super::list::ListArgs;
use super::search::SearchArgs;
use super::show::ShowArgs;

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Personal task tracker for the terminal", version)]
pub struct Cli {
    /// Path to the tasks file (overrides the config file)
    #[arg(long, global = true, env = "TODO_TRACKER_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(AddArgs),

    /// Replace a task's text, priority and due date
    Edit(EditArgs),

    /// Delete a task
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Mark a task as completed
    Done(DoneArgs),

    /// List tasks sorted by due date
    #[command(alias = "ls")]
    List(ListArgs),

    /// Find tasks containing any of the keywords
    Search(SearchArgs),

    /// Show a single task
    Show(ShowArgs),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
