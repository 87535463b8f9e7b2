//! todo - Personal task tracker for the terminal

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use todo_tracker::cli::{self, Cli, Commands, Session};

fn main() -> Result<()> {
    if std::env::var("TODO_TRACKER_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("todo_tracker=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    // Completions don't touch the tasks file.
    if let Commands::Completion { shell } = cli.command {
        generate(shell, &mut Cli::command(), "todo", &mut std::io::stdout());
        return Ok(());
    }

    let session = Session::open(cli.file.as_deref())?;

    match cli.command {
        Commands::Add(args) => cli::add::run(session, args),
        Commands::Edit(args) => cli::edit::run(session, args),
        Commands::Delete(args) => cli::delete::run(session, args),
        Commands::Done(args) => cli::done::run(session, args),
        Commands::List(args) => cli::list::run(session, args),
        Commands::Search(args) => cli::search::run(session, args),
        Commands::Show(args) => cli::show::run(session, args),
        Commands::Completion { .. } => unreachable!(),
    }
}
