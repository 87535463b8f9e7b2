//! `todo done` command implementation

use anyhow::Result;
use clap::Args;

use super::{describe, Session};
use crate::task::TaskId;

#[derive(Args)]
pub struct DoneArgs {
    /// Task ID
    pub id: u32,
}

pub fn run(mut session: Session, args: DoneArgs) -> Result<()> {
    let task = session.store.complete(TaskId(args.id))?;
    println!("Task completed: {}", describe(&session, &task));
    session.finish()
}
