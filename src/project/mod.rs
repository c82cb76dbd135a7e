//! Project discovery and command-folder resolution.
//!
//! A "project" is a directory containing `pubspec.yaml`. This module finds
//! projects beneath workspace folders and decides which one an invoked
//! command should target, prompting through the [`crate::host::Host`]
//! abstraction when more than one qualifies.

mod locate;
mod resolver;
#[cfg(test)]
mod tests;

// Re-exports
pub use locate::{
    find_project_folders, is_flutter_project_folder, locate_best_project_root, PUBSPEC_FILE,
};
pub use resolver::resolve_command_folder;
