use anyhow::Result;

use crate::config::Config;
use crate::host::Host;
use crate::project::{find_project_folders, is_flutter_project_folder};
use crate::util::home_relative_path;

/// List the project folders found under the workspace roots.
pub async fn run_list<H: Host>(host: &H, config: &Config, flutter_only: bool) -> Result<()> {
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
        return Ok(());
    }

    println!("Found {} project folder(s):", folders.len());
    for folder in &folders {
        let marker = if is_flutter_project_folder(folder) {
            "  [flutter]"
        } else {
            ""
        };
        println!("  {}{}", home_relative_path(folder), marker);
    }

    Ok(())
}
