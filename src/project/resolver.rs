//! Resolving which project folder a command should run in.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::Config;
use crate::host::{FolderPickItem, Host};
use crate::project::locate::{find_project_folders, locate_best_project_root};
use crate::util::home_relative_path;

/// Find the project folder a command should target.
///
/// An explicit selection or the host's active file short-circuits to its
/// nearest enclosing project root. Otherwise all project folders under the
/// open workspace folders are candidates: none yields a warning and `None`,
/// one is returned promptless, and more than one goes through the host's
/// folder picker. `Ok(None)` uniformly means "nothing to do" (no projects,
/// or the user cancelled), never a fault.
pub async fn resolve_command_folder<H: Host>(
    host: &H,
    config: &Config,
    placeholder: &str,
    selection: Option<&Path>,
    flutter_only: bool,
) -> Result<Option<PathBuf>> {
    // Attempt to find a project based on the supplied path or active file.
    let file = selection
        .map(Path::to_path_buf)
        .or_else(|| host.active_file());
    if let Some(file) = file {
        if let Some(folder) = locate_best_project_root(&file) {
            debug!(
                "Resolved {} to project root {}",
                file.display(),
                folder.display()
            );
            return Ok(Some(folder));
        }
    }

    // Otherwise look for what projects we have.
    let workspace_folders = host.workspace_folders();
    let excluded = config.excluded_folders(&workspace_folders);
    let selectable = find_project_folders(&workspace_folders, &excluded, flutter_only);

    if selectable.is_empty() {
        let project_types = if flutter_only {
            "Flutter"
        } else {
            "Dart/Flutter"
        };
        host.show_warning(&format!("No {} projects were found.", project_types));
        return Ok(None);
    }

    Ok(pick_project_folder(host, selectable, placeholder).await)
}

/// Let the user choose between candidate folders. A singleton is returned
/// without prompting.
async fn pick_project_folder<H: Host>(
    host: &H,
    folders: Vec<PathBuf>,
    placeholder: &str,
) -> Option<PathBuf> {
    // No point asking the user if there's only one.
    if folders.len() == 1 {
        return folders.into_iter().next();
    }

    let items: Vec<FolderPickItem> = folders
        .into_iter()
        .filter_map(|folder| {
            let workspace_folder = host.workspace_folder_of(&folder)?;
            let workspace_parent = workspace_folder
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| workspace_folder.clone());

            let label = folder
                .strip_prefix(&workspace_parent)
                .map(|rel| rel.display().to_string())
                .unwrap_or_else(|_| folder.display().to_string());

            Some(FolderPickItem {
                label,
                description: home_relative_path(&workspace_parent),
                path: folder,
            })
        })
        .collect();

    host.pick_folder(items, placeholder).await
}
