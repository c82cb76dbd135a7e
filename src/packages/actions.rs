//! Prompt-and-run helpers for fetching packages.
//!
//! Declining a prompt is a no-op, never an error. Command failures from the
//! host propagate unchanged; there is no retry here.

use anyhow::Result;
use std::path::PathBuf;

use crate::host::{Host, PackageCommand};

pub const PUB_GET_PROMPT: &str =
    "Some packages are missing or out of date, would you like to get them now?";
pub const PUB_GET_LABEL: &str = "Run 'pub get'";

pub const PUB_UPGRADE_PROMPT: &str =
    "Your SDK has been updated since you last fetched packages, would you like to fetch updated packages?";
pub const PUB_UPGRADE_LABEL: &str = "Run 'pub upgrade'";

/// Offer to run `pub get` over the folders; run it if the user accepts.
pub async fn prompt_to_run_pub_get<H: Host>(host: &H, folders: &[PathBuf]) -> Result<()> {
    if host.confirm(PUB_GET_PROMPT, PUB_GET_LABEL).await {
        run_pub_get(host, folders).await?;
    }
    Ok(())
}

/// Offer to run `pub upgrade` over the folders; run it if the user accepts.
pub async fn prompt_to_run_pub_upgrade<H: Host>(host: &H, folders: &[PathBuf]) -> Result<()> {
    if host.confirm(PUB_UPGRADE_PROMPT, PUB_UPGRADE_LABEL).await {
        run_pub_upgrade(host, folders).await?;
    }
    Ok(())
}

/// Run `pub get` over the folders without prompting.
pub async fn run_pub_get<H: Host>(host: &H, folders: &[PathBuf]) -> Result<()> {
    host.run_package_command(PackageCommand::GetPackages, folders)
        .await
}

/// Run `pub upgrade` over the folders without prompting.
pub async fn run_pub_upgrade<H: Host>(host: &H, folders: &[PathBuf]) -> Result<()> {
    host.run_package_command(PackageCommand::UpgradePackages, folders)
        .await
}
