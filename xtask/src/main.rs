//! xtask - Development tasks for todo-tracker

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tasks for todo-tracker")]
struct Xtask {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the `todo` command reference as markdown
    GenDocs {
        /// Output file
        #[arg(long, default_value = "docs/cli/reference.md")]
        out: PathBuf,
    },
}

fn main() {
    match Xtask::parse().command {
        Commands::GenDocs { out } => write_cli_reference(&out),
    }
}

fn write_cli_reference(out: &std::path::Path) {
    let markdown = clap_markdown::help_markdown::<todo_tracker::cli::Cli>();

    if let Some(dir) = out.parent() {
        fs::create_dir_all(dir).expect("Failed to create output directory");
    }
    fs::write(out, markdown).expect("Failed to write CLI reference");

    println!("Wrote todo CLI reference to {}", out.display());
}
