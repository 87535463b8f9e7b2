//! `todo search` command implementation

use anyhow::Result;
use clap::Args;

use super::{print_tasks, Session};
use crate::task::split_keywords;

#[derive(Args)]
pub struct SearchArgs {
    /// Keywords; a task matches if its text contains any of them
    #[arg(required = true)]
    pub keywords: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(session: Session, args: SearchArgs) -> Result<()> {
    // Quoted arguments like "buy milk" count as separate keywords.
    let keywords: Vec<String> = args
        .keywords
        .iter()
        .flat_map(|k| split_keywords(k))
        .collect();
    let tasks = session.store.search(&keywords);

    if tasks.is_empty() && !args.json {
        println!("No tasks match the given keywords.");
        return session.finish();
    }

    print_tasks(&session, &tasks, args.json)?;
    session.finish()
}
