use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pubcheck - checks whether Dart/Flutter projects need 'pub get'
#[derive(Parser)]
#[command(name = "pubcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Workspace root folder(s) to search (defaults to the current directory)
    #[arg(short = 'r', long = "root", global = true)]
    pub roots: Vec<PathBuf>,

    /// Folder names excluded from project discovery (repeatable)
    #[arg(long = "exclude", global = true)]
    pub exclude: Vec<String>,

    /// Dart SDK root (defaults to $DART_SDK, then `dart` on PATH)
    #[arg(long, global = true)]
    pub dart_sdk: Option<PathBuf>,

    /// Flutter SDK root (defaults to $FLUTTER_ROOT)
    #[arg(long, global = true)]
    pub flutter_sdk: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the project folders found under the workspace roots
    List {
        /// Only consider Flutter projects
        #[arg(long)]
        flutter_only: bool,
    },
    /// Report whether projects need 'pub get' or 'pub upgrade', and offer to run it
    Check {
        /// Project folder or file; resolves to its nearest project root
        path: Option<PathBuf>,

        /// Check every project folder instead of resolving one
        #[arg(long)]
        all: bool,

        /// Only consider Flutter projects
        #[arg(long)]
        flutter_only: bool,

        /// Report only; never prompt. Exits 1 when action is required
        #[arg(long)]
        no_prompt: bool,
    },
    /// Run 'pub get' in the resolved project folder(s)
    Get {
        /// Project folder or file; resolves to its nearest project root
        path: Option<PathBuf>,

        /// Run in every project folder instead of resolving one
        #[arg(long)]
        all: bool,

        /// Only consider Flutter projects
        #[arg(long)]
        flutter_only: bool,
    },
    /// Run 'pub upgrade' in the resolved project folder(s)
    Upgrade {
        /// Project folder or file; resolves to its nearest project root
        path: Option<PathBuf>,

        /// Run in every project folder instead of resolving one
        #[arg(long)]
        all: bool,

        /// Only consider Flutter projects
        #[arg(long)]
        flutter_only: bool,
    },
}
