//! `todo add` command implementation

use anyhow::Result;
use clap::Args;

use super::{describe, Session};
use crate::task::parse_due_date;

#[derive(Args)]
pub struct AddArgs {
    /// Task text
    pub text: String,

    /// Priority (any integer)
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub priority: i64,

    /// Due date (DD.MM.YYYY, YYYY-MM-DD, MM/DD/YYYY or MM-DD-YYYY)
    #[arg(short, long)]
    pub due: String,
}

pub fn run(mut session: Session, args: AddArgs) -> Result<()> {
    let due_date = parse_due_date(&args.due)?;
    let task = session.store.add(args.text, args.priority, due_date)?;
    println!("Task added: {}", describe(&session, &task));
    session.finish()
}
