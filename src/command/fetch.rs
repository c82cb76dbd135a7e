use anyhow::Result;
use std::path::Path;

use crate::command::resolve_target_folders;
use crate::config::Config;
use crate::host::Host;
use crate::packages::{run_pub_get, run_pub_upgrade};

/// Run `pub get` in the resolved project folder(s), without prompting.
pub async fn run_get<H: Host>(
    host: &H,
    config: &Config,
    path: Option<&Path>,
    all: bool,
    flutter_only: bool,
) -> Result<()> {
    let folders = resolve_target_folders(
        host,
        config,
        "Select the project to get packages for",
        path,
        all,
        flutter_only,
    )
    .await?;
    if folders.is_empty() {
        return Ok(());
    }
    run_pub_get(host, &folders).await
}

/// Run `pub upgrade` in the resolved project folder(s), without prompting.
pub async fn run_upgrade<H: Host>(
    host: &H,
    config: &Config,
    path: Option<&Path>,
    all: bool,
    flutter_only: bool,
) -> Result<()> {
    let folders = resolve_target_folders(
        host,
        config,
        "Select the project to upgrade packages for",
        path,
        all,
        flutter_only,
    )
    .await?;
    if folders.is_empty() {
        return Ok(());
    }
    run_pub_upgrade(host, &folders).await
}
