use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "steward")]
#[command(version, about = "Monorepo housekeeping", long_about = None)]
pub struct Cli {
    /// Repo root to operate on (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Path to custom config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Maintain the generated .gitignore
    Gitignore {
        #[command(subcommand)]
        command: GitignoreCommands,
    },
    /// Work with TRACK markers pointing at external issues
    Tracking {
        #[command(subcommand)]
        command: TrackingCommands,
    },
    /// List TODO, CHECK and FIXME markers across the tree
    Todo,
    /// Manage license headers
    License {
        #[command(subcommand)]
        command: LicenseCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum GitignoreCommands {
    /// Rebuild the .gitignore from the fragment directory
    Generate,
}

#[derive(Subcommand, Debug)]
pub enum TrackingCommands {
    /// List tracked URLs, annotated with live issue state
    List,
}

#[derive(Subcommand, Debug)]
pub enum LicenseCommands {
    /// Stamp license headers over the tree with the configured tool
    AddHeaders,
}
