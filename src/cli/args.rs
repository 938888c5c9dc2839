use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "readability-diff")]
#[command(about = "Readability scores and diffs for markdown documentation", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Number of worker threads (0 = all cores)
    #[arg(short = 'j', long, default_value = "0", global = true)]
    pub jobs: usize,

    /// Score documents one at a time
    #[arg(long, global = true)]
    pub no_parallel: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score the documents of a working tree
    Score {
        /// Root directory of the documentation
        #[arg(default_value = ".")]
        path: PathBuf,

        #[command(flatten)]
        selection: SelectionArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Score two git revisions and report the change between them
    Compare {
        /// Base revision
        #[arg(long)]
        base: String,

        /// Head revision
        #[arg(long, default_value = "HEAD")]
        head: String,

        /// Path inside the repository
        #[arg(long, default_value = ".")]
        repo: PathBuf,

        #[command(flatten)]
        selection: SelectionArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Build a report from two stored snapshots and a stored change-set
    Diff {
        /// Snapshot JSON of the old state
        #[arg(long)]
        old: PathBuf,

        /// Snapshot JSON of the new state
        #[arg(long)]
        new: PathBuf,

        /// Change-set JSON ({"added", "modified", "renamed"})
        #[arg(long)]
        changes: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Write a default .readability.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Which documents form a snapshot and how they are normalized.
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Glob of the documents to score (overrides the config file)
    #[arg(long)]
    pub pattern: Option<String>,

    /// Globs to leave out (overrides the config file)
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Raw markup line that toggles a scripted block
    #[arg(long)]
    pub script_marker: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
