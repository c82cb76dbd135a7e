//! Project folder discovery.
//!
//! A project folder is any directory containing a `pubspec.yaml`. Discovery
//! walks each workspace folder with `ignore::WalkBuilder` (standard filters,
//! no symlink following) plus the configured excluded folder names, bounded
//! to a fixed depth.

use ignore::WalkBuilder;
use regex::Regex;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, warn};

/// The project manifest file name.
pub const PUBSPEC_FILE: &str = "pubspec.yaml";

/// How deep below a workspace folder to look for projects.
const PROJECT_SEARCH_DEPTH: usize = 5;

static FLUTTER_SDK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)sdk\s*:\s*flutter").expect("valid regex literal"));

/// Whether a directory is a project folder (contains a pubspec).
pub fn is_project_folder(folder: &Path) -> bool {
    folder.join(PUBSPEC_FILE).is_file()
}

/// Whether a project folder's pubspec references the Flutter SDK.
pub fn is_flutter_project_folder(folder: &Path) -> bool {
    let pubspec = folder.join(PUBSPEC_FILE);
    match std::fs::read_to_string(&pubspec) {
        Ok(content) => FLUTTER_SDK_RE.is_match(&content),
        Err(_) => false,
    }
}

/// The nearest enclosing directory containing a pubspec, starting from a
/// file or directory path.
pub fn locate_best_project_root(path: &Path) -> Option<PathBuf> {
    let start = if path.is_dir() { path } else { path.parent()? };
    start
        .ancestors()
        .find(|dir| is_project_folder(dir))
        .map(Path::to_path_buf)
}

/// All project folders beneath the given workspace folders, sorted and
/// deduplicated. Folders whose name is in `excluded` are not descended into.
pub fn find_project_folders(
    workspace_folders: &[PathBuf],
    excluded: &HashSet<String>,
    flutter_only: bool,
) -> Vec<PathBuf> {
    let mut found = Vec::new();

    for root in workspace_folders {
        debug!("Searching for projects under {}", root.display());

        let excluded = excluded.clone();
        let mut builder = WalkBuilder::new(root);
        builder
            .max_depth(Some(PROJECT_SEARCH_DEPTH))
            .standard_filters(true)
            .follow_links(false)
            .filter_entry(move |entry| {
                entry
                    .file_name()
                    .to_str()
                    .map_or(true, |name| !excluded.contains(name))
            });

        for entry in builder.build() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("Error walking {}: {}", root.display(), e);
                    continue;
                }
            };
            let path = entry.path();
            if entry.file_type().is_some_and(|t| t.is_dir()) && is_project_folder(path) {
                found.push(path.to_path_buf());
            }
        }
    }

    if flutter_only {
        found.retain(|folder| is_flutter_project_folder(folder));
    }

    found.sort();
    found.dedup();

    debug!("Found {} project folder(s)", found.len());
    found
}
