//! Task storage - JSON file persistence

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::error::Result;
use super::model::Task;

pub const APP_DIR_NAME: &str = "todo-tracker";
pub const TASKS_FILE_NAME: &str = "tasks.json";

/// Default location of the tasks file: `<data dir>/todo-tracker/tasks.json`,
/// or `./tasks.json` when the platform has no data directory.
pub fn default_tasks_path() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR_NAME).join(TASKS_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(TASKS_FILE_NAME))
}

#[derive(Debug, Clone)]
pub struct Storage {
    tasks_path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            tasks_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.tasks_path
    }

    fn backup_path(&self) -> PathBuf {
        self.tasks_path.with_extension("json.bak")
    }

    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.tasks_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.tasks_path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> = serde_json::from_str(&content)?;
        info!(
            "Loaded {} tasks from {}",
            tasks.len(),
            self.tasks_path.display()
        );
        Ok(tasks)
    }

    /// Overwrite the whole file with `tasks`. Not atomic: a crash mid-write
    /// can leave a truncated file, with the previous contents in the backup.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.tasks_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        if self.tasks_path.exists() {
            if let Err(e) = fs::copy(&self.tasks_path, self.backup_path()) {
                warn!("Failed to create backup: {}", e);
            }
        }

        let content = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.tasks_path, content)?;
        info!("Saved {} tasks to {}", tasks.len(), self.tasks_path.display());
        Ok(())
    }
}
