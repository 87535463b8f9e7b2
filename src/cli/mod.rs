//! CLI command implementations

pub mod add;
pub mod definition;
pub mod delete;
pub mod done;
pub mod edit;
pub mod list;
pub mod search;
pub mod show;

pub use definition::{Cli, Commands};

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use crate::config::Config;
use crate::task::{format_due_date, Storage, Task, TaskStore};

const TABLE_COL_ID: usize = 5;
const TABLE_COL_TEXT: usize = 40;
const TABLE_COL_PRIORITY: usize = 8;
const TABLE_COL_STATUS: usize = 13;

/// Resolved config plus the store it points at.
pub struct Session {
    pub config: Config,
    pub store: TaskStore,
}

impl Session {
    /// Load config and open the tasks file. A broken tasks file is reported
    /// on stderr and treated as an empty list.
    pub fn open(file: Option<&Path>) -> Result<Self> {
        let config = Config::load()?;
        let path = config.tasks_path(file);
        debug!("Using tasks file {}", path.display());

        let store = TaskStore::open(Storage::new(path));
        if let Some(e) = store.load_error() {
            eprintln!(
                "Warning: could not read {} ({}); starting with an empty list.",
                store.storage().path().display(),
                e
            );
        }
        Ok(Self { config, store })
    }

    /// Write back if memory is ahead of disk: a save after a change failed,
    /// or loading had to repair ids.
    pub fn finish(mut self) -> Result<()> {
        if self.store.is_dirty() {
            let path = self.store.storage().path().display().to_string();
            self.store
                .save()
                .with_context(|| format!("Failed to save tasks to {}", path))?;
        }
        Ok(())
    }

    pub fn format_date(&self, task: &Task) -> String {
        format_due_date(&task.due_date, &self.config.display.date_format)
    }
}

pub fn truncate(s: &str, max: usize) -> String {
    let count = s.chars().count();
    if count <= max {
        s.to_string()
    } else if max <= 3 {
        s.chars().take(max).collect()
    } else {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    }
}

pub fn print_table_header() {
    println!(
        "{:<width_id$} {:<width_text$} {:<width_prio$} {:<width_status$} DUE",
        "ID",
        "TEXT",
        "PRIORITY",
        "STATUS",
        width_id = TABLE_COL_ID,
        width_text = TABLE_COL_TEXT,
        width_prio = TABLE_COL_PRIORITY,
        width_status = TABLE_COL_STATUS
    );
    println!(
        "{}",
        "-".repeat(TABLE_COL_ID + TABLE_COL_TEXT + TABLE_COL_PRIORITY + TABLE_COL_STATUS + 14)
    );
}

pub fn print_table_row(session: &Session, task: &Task) {
    println!(
        "{:<width_id$} {:<width_text$} {:<width_prio$} {:<width_status$} {}",
        task.id,
        truncate(&task.text, TABLE_COL_TEXT),
        task.priority,
        task.status_label(),
        session.format_date(task),
        width_id = TABLE_COL_ID,
        width_text = TABLE_COL_TEXT,
        width_prio = TABLE_COL_PRIORITY,
        width_status = TABLE_COL_STATUS
    );
}

/// One-line summary used after a mutation, e.g.
/// `3. Buy milk (priority: 2, status: not completed, due: 01.06.2024)`.
pub fn describe(session: &Session, task: &Task) -> String {
    format!(
        "{}. {} (priority: {}, status: {}, due: {})",
        task.id,
        task.text,
        task.priority,
        task.status_label(),
        session.format_date(task)
    )
}

pub fn print_tasks(session: &Session, tasks: &[Task], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(tasks)?);
        return Ok(());
    }

    print_table_header();
    for task in tasks {
        print_table_row(session, task);
    }
    println!("\nTotal: {} tasks", tasks.len());
    Ok(())
}
