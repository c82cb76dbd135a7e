mod check;
mod fetch;
mod list;

pub use check::run_check;
pub use fetch::{run_get, run_upgrade};
pub use list::run_list;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::host::Host;
use crate::project::{find_project_folders, resolve_command_folder};

/// Resolve the folders a command should run over: every project folder with
/// `--all`, otherwise a single folder via the resolver (explicit path,
/// active file, or the picker). An empty result means there is nothing to
/// do and a warning has already been shown where appropriate.
pub(crate) async fn resolve_target_folders<H: Host>(
    host: &H,
    config: &Config,
    placeholder: &str,
    path: Option<&Path>,
    all: bool,
    flutter_only: bool,
) -> Result<Vec<PathBuf>> {
    if all {
        let workspace_folders = host.workspace_folders();
        let excluded = config.excluded_folders(&workspace_folders);
        let folders = find_project_folders(&workspace_folders, &excluded, flutter_only);
        if folders.is_empty() {
            let project_types = if flutter_only {
                "Flutter"
            } else {
                "Dart/Flutter"
            };
            host.show_warning(&format!("No {} projects were found.", project_types));
        }
        return Ok(folders);
    }

    let folder = resolve_command_folder(host, config, placeholder, path, flutter_only).await?;
    Ok(folder.into_iter().collect())
}
