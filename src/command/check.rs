use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::command::resolve_target_folders;
use crate::config::Config;
use crate::host::Host;
use crate::packages::{
    evaluate_package_status, prompt_to_run_pub_get, prompt_to_run_pub_upgrade,
};
use crate::sdk::Sdks;

/// Evaluate package status for the resolved folder(s), report every reason,
/// and offer to fix what needs fixing.
///
/// Returns true when action is still required and no prompt was allowed
/// (`--no-prompt`); the caller turns that into a non-zero exit for CI use.
pub async fn run_check<H: Host>(
    host: &H,
    config: &Config,
    sdks: &Sdks,
    path: Option<&Path>,
    all: bool,
    flutter_only: bool,
    no_prompt: bool,
) -> Result<bool> {
    let folders = resolve_target_folders(
        host,
        config,
        "Select the project to check",
        path,
        all,
        flutter_only,
    )
    .await?;
    if folders.is_empty() {
        return Ok(false);
    }

    let mut needing: Vec<PathBuf> = Vec::new();
    let mut any_upgrade = false;
    for folder in &folders {
        match evaluate_package_status(sdks, folder)? {
            Some(status) => {
                println!("⬇️  {}: {}", folder.display(), status.reason);
                any_upgrade |= status.requires_upgrade;
                needing.push(folder.clone());
            }
            None => println!("✅ {}: packages are up to date", folder.display()),
        }
    }

    if needing.is_empty() {
        return Ok(false);
    }
    if no_prompt {
        return Ok(true);
    }

    // An SDK upgrade anywhere makes upgrade the better fix for the batch.
    if any_upgrade {
        prompt_to_run_pub_upgrade(host, &needing).await?;
    } else {
        prompt_to_run_pub_get(host, &needing).await?;
    }
    Ok(false)
}
