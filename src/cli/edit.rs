//! `todo edit` command implementation

use anyhow::Result;
use clap::Args;

use super::{describe, Session};
use crate::task::{parse_due_date, TaskId};

#[derive(Args)]
pub struct EditArgs {
    /// Task ID
    pub id: u32,

    /// New task text
    pub text: String,

    /// New priority
    #[arg(short, long, allow_negative_numbers = true)]
    pub priority: i64,

    /// New due date
    #[arg(short, long)]
    pub due: String,
}

pub fn run(mut session: Session, args: EditArgs) -> Result<()> {
    let due_date = parse_due_date(&args.due)?;
    let task = session
        .store
        .edit(TaskId(args.id), args.text, args.priority, due_date)?;
    println!("Task updated: {}", describe(&session, &task));
    session.finish()
}
