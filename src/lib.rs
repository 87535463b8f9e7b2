//! todo-tracker library - task store, persistence and CLI driver for the `todo` binary

pub mod cli;
pub mod config;
pub mod task;
