//! `todo list` command implementation

use anyhow::Result;
use clap::Args;

use super::{print_tasks, Session};
use crate::config::DisplayConfig;

#[derive(Args)]
pub struct ListArgs {
    /// Include completed tasks
    #[arg(short, long, conflicts_with = "open")]
    pub all: bool,

    /// Only open tasks, even if the config shows completed ones
    #[arg(short, long)]
    pub open: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    fn show_completed(&self, display: &DisplayConfig) -> bool {
        if self.open {
            return false;
        }
        self.all || display.show_completed
    }
}

pub fn run(session: Session, args: ListArgs) -> Result<()> {
    let show_completed = args.show_completed(&session.config.display);
    let tasks = session.store.list(show_completed);

    if tasks.is_empty() && !args.json {
        println!("No tasks found.");
        return session.finish();
    }

    print_tasks(&session, &tasks, args.json)?;
    session.finish()
}
