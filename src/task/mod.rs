//! Task management module
//!
//! This module provides the personal task list:
//! - Task model with numeric ids, priority and due date
//! - Due date parsing in several accepted layouts
//! - JSON file persistence with whole-file writes
//! - The task store: add, edit, delete, complete, list, search

pub mod date;
pub mod error;
pub mod model;
pub mod storage;
pub mod store;

pub use date::{format_due_date, parse_due_date, DISPLAY_DATE_FORMAT, DUE_DATE_FORMATS};
pub use error::TaskError;
pub use model::{Task, TaskId};
pub use storage::{default_tasks_path, Storage};
pub use store::{split_keywords, TaskStore};
