//! Host abstraction for everything that talks to the user or the system.
//!
//! The folder resolver and the package-status flows never touch stdin or
//! spawn processes themselves; they go through [`Host`] so the decision
//! logic can be exercised against a scripted fake. The shipped
//! implementation is [`TerminalHost`].

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::project::is_flutter_project_folder;
use crate::sdk::Sdks;

/// One entry in the folder selection prompt.
#[derive(Debug, Clone)]
pub struct FolderPickItem {
    /// Folder path relative to the parent of its workspace folder.
    pub label: String,
    /// Home-relative parent of the workspace folder, for context.
    pub description: String,
    /// The absolute folder path returned on selection.
    pub path: PathBuf,
}

/// Package-management commands the host can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageCommand {
    GetPackages,
    UpgradePackages,
}

/// The narrow surface of the environment the flows run in.
#[allow(async_fn_in_trait)]
pub trait Host {
    /// Open top-level workspace folders.
    fn workspace_folders(&self) -> Vec<PathBuf>;

    /// The file the user is "in", if the host has such a notion.
    fn active_file(&self) -> Option<PathBuf>;

    /// The workspace folder that owns `path`, if any.
    fn workspace_folder_of(&self, path: &Path) -> Option<PathBuf>;

    /// Show a non-fatal warning to the user.
    fn show_warning(&self, message: &str);

    /// Ask the user to pick one folder. `None` means cancelled.
    async fn pick_folder(&self, items: Vec<FolderPickItem>, placeholder: &str) -> Option<PathBuf>;

    /// Show a message with a single action button; true if it was activated.
    async fn confirm(&self, message: &str, action_label: &str) -> bool;

    /// Run a package-management command over the given folders.
    async fn run_package_command(
        &self,
        command: PackageCommand,
        folders: &[PathBuf],
    ) -> Result<()>;
}

/// Pick the workspace folder owning `path`: the longest enumerated folder
/// that is a prefix of it.
pub fn owning_workspace_folder(workspace_folders: &[PathBuf], path: &Path) -> Option<PathBuf> {
    workspace_folders
        .iter()
        .filter(|folder| path.starts_with(folder))
        .max_by_key(|folder| folder.as_os_str().len())
        .cloned()
}

/// Terminal implementation of [`Host`]: numbered-list picker and y/N
/// confirmation on stdin, package commands via `dart pub` / `flutter pub`
/// subprocesses.
pub struct TerminalHost {
    folders: Vec<PathBuf>,
    sdks: Sdks,
}

impl TerminalHost {
    pub fn new(folders: Vec<PathBuf>, sdks: Sdks) -> Self {
        TerminalHost { folders, sdks }
    }

    /// The program and arguments used to run `command` in `folder`.
    ///
    /// Flutter projects use the `flutter` tool when a Flutter SDK is known,
    /// since plain `dart pub` cannot resolve `sdk: flutter` dependencies.
    fn package_invocation(&self, command: PackageCommand, folder: &Path) -> (PathBuf, [&'static str; 2]) {
        let verb = match command {
            PackageCommand::GetPackages => "get",
            PackageCommand::UpgradePackages => "upgrade",
        };
        let program = match &self.sdks.flutter {
            Some(flutter) if is_flutter_project_folder(folder) => {
                flutter.join("bin").join(flutter_tool_name())
            }
            _ => match &self.sdks.dart {
                Some(dart) => dart.join("bin").join(dart_tool_name()),
                None => PathBuf::from(dart_tool_name()),
            },
        };
        (program, ["pub", verb])
    }
}

impl Host for TerminalHost {
    fn workspace_folders(&self) -> Vec<PathBuf> {
        self.folders.clone()
    }

    fn active_file(&self) -> Option<PathBuf> {
        None
    }

    fn workspace_folder_of(&self, path: &Path) -> Option<PathBuf> {
        owning_workspace_folder(&self.folders, path)
    }

    fn show_warning(&self, message: &str) {
        println!("⚠️  {}", message);
    }

    async fn pick_folder(&self, items: Vec<FolderPickItem>, placeholder: &str) -> Option<PathBuf> {
        println!("{}", placeholder);
        for (idx, item) in items.iter().enumerate() {
            println!("  {}. {} ({})", idx + 1, item.label, item.description);
        }
        print!("Enter a number (or press Enter to cancel): ");
        io::stdout().flush().ok()?;

        let mut answer = String::new();
        io::stdin().read_line(&mut answer).ok()?;
        let choice: usize = answer.trim().parse().ok()?;

        let index = choice.checked_sub(1)?;
        items.into_iter().nth(index).map(|item| item.path)
    }

    async fn confirm(&self, message: &str, action_label: &str) -> bool {
        println!("{}", message);
        print!("{}? [y/N]: ", action_label);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        if io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        let answer = answer.trim().to_lowercase();
        answer == "y" || answer == "yes"
    }

    async fn run_package_command(
        &self,
        command: PackageCommand,
        folders: &[PathBuf],
    ) -> Result<()> {
        for folder in folders {
            let (program, args) = self.package_invocation(command, folder);
            info!(
                "Running '{} {} {}' in {}",
                program.display(),
                args[0],
                args[1],
                folder.display()
            );
            let status = tokio::process::Command::new(&program)
                .args(args)
                .current_dir(folder)
                .status()
                .await
                .with_context(|| format!("failed to launch {}", program.display()))?;
            if !status.success() {
                anyhow::bail!(
                    "'{} {} {}' failed in {} ({})",
                    program.display(),
                    args[0],
                    args[1],
                    folder.display(),
                    status
                );
            }
        }
        Ok(())
    }
}

fn dart_tool_name() -> &'static str {
    if cfg!(windows) {
        "dart.exe"
    } else {
        "dart"
    }
}

fn flutter_tool_name() -> &'static str {
    if cfg!(windows) {
        "flutter.bat"
    } else {
        "flutter"
    }
}
