//! `todo show` command implementation

use anyhow::Result;
use clap::Args;

use super::Session;
use crate::task::{TaskError, TaskId};

#[derive(Args)]
pub struct ShowArgs {
    /// Task ID
    pub id: u32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(session: Session, args: ShowArgs) -> Result<()> {
    let id = TaskId(args.id);
    let task = session.store.get(id).ok_or(TaskError::NotFound(id))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&task)?);
        return session.finish();
    }

    println!("{}: {}", task.id, task.text);
    println!("  Status: {}", task.status_label());
    println!("  Priority: {}", task.priority);
    println!("  Due: {}", session.format_date(&task));
    session.finish()
}
