//! `todo delete` command implementation

use anyhow::Result;
use clap::Args;

use super::{describe, Session};
use crate::task::TaskId;

#[derive(Args)]
pub struct DeleteArgs {
    /// Task ID
    pub id: u32,
}

pub fn run(mut session: Session, args: DeleteArgs) -> Result<()> {
    let task = session.store.delete(TaskId(args.id))?;
    println!("Task deleted: {}", describe(&session, &task));
    session.finish()
}
