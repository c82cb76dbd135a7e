//! Invocation configuration and per-workspace settings.
//!
//! Exclusion patterns come from three layers: built-in defaults, `--exclude`
//! flags, and an optional `.pubcheck.json` settings file at each workspace
//! root. A missing settings file is normal; a malformed one is reported and
//! ignored.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Per-workspace settings file name.
pub const SETTINGS_FILE: &str = ".pubcheck.json";

/// Directory names that are never searched for projects.
pub const DEFAULT_EXCLUDED_FOLDERS: &[&str] =
    &[".dart_tool", ".git", ".svn", "build", ".symlinks", ".pub-cache"];

/// Settings read from `.pubcheck.json` at a workspace root.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSettings {
    /// Extra folder names excluded from project discovery in this workspace.
    #[serde(default)]
    pub excluded_folders: Vec<String>,
}

impl WorkspaceSettings {
    /// Load the settings file from a workspace folder, falling back to
    /// defaults when it is absent or unreadable.
    pub fn load(workspace_folder: &Path) -> Self {
        let path = workspace_folder.join(SETTINGS_FILE);
        if !path.is_file() {
            return Self::default();
        }
        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => {
                    debug!("Loaded workspace settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    warn!("Ignoring malformed {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Configuration assembled from CLI flags for a single invocation.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Extra excluded folder names from `--exclude`.
    pub exclude: Vec<String>,
}

impl Config {
    pub fn new(exclude: Vec<String>) -> Self {
        Config { exclude }
    }

    /// The full excluded-folder set for a group of workspace folders:
    /// defaults, CLI flags, and each workspace's settings file.
    pub fn excluded_folders(&self, workspace_folders: &[PathBuf]) -> HashSet<String> {
        let mut excluded: HashSet<String> = DEFAULT_EXCLUDED_FOLDERS
            .iter()
            .map(|s| s.to_string())
            .collect();
        excluded.extend(self.exclude.iter().cloned());
        for folder in workspace_folders {
            excluded.extend(WorkspaceSettings::load(folder).excluded_folders);
        }
        excluded
    }
}
