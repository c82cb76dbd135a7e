//! Deciding whether `pub get` or `pub upgrade` is probably required.
//!
//! The evaluator inspects a project folder's `pubspec.yaml`,
//! `pubspec.lock` and `.dart_tool/package_config.json` plus the current
//! SDK version, and returns the first rule that fires together with a
//! human-readable reason. `Ok(None)` means no action is needed (or the
//! folder is not package-managed); filesystem faults surface as `Err`
//! rather than being swallowed.

use anyhow::{Context, Result};
use regex::Regex;
use semver::Version;
use std::path::Path;
use std::sync::LazyLock;
use std::time::SystemTime;
use tracing::{info, warn};

use crate::packages::config_file::{package_config_path, PackageConfig, PACKAGE_CONFIG_FILE};
use crate::project::PUBSPEC_FILE;
use crate::sdk::Sdks;
use crate::util::{format_modified_time, is_within_path};

/// The project's pinned-dependency lock file.
pub const PUBSPEC_LOCK_FILE: &str = "pubspec.lock";

// Deliberately a text probe, not a YAML parse: a commented-out section is an
// acceptable false positive, an unparseable pubspec must not stop the check.
static DEPENDENCIES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)dependencies\s*:").expect("valid regex literal"));

/// Outcome of a package status evaluation. `requires_get` is true for every
/// returned status; `requires_upgrade` marks the cases where upgrading is
/// the better fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageStatus {
    pub requires_get: bool,
    pub requires_upgrade: bool,
    /// Which rule fired, with the paths/timestamps/versions it compared.
    /// Shown to the user verbatim.
    pub reason: String,
}

impl PackageStatus {
    fn get_required(reason: String) -> Self {
        PackageStatus {
            requires_get: true,
            requires_upgrade: false,
            reason,
        }
    }

    fn upgrade_required(reason: String) -> Self {
        PackageStatus {
            requires_get: true,
            requires_upgrade: true,
            reason,
        }
    }
}

/// Evaluate whether a project folder probably needs its packages fetched.
pub fn evaluate_package_status(sdks: &Sdks, folder: &Path) -> Result<Option<PackageStatus>> {
    let pubspec_path = folder.join(PUBSPEC_FILE);
    let lock_path = folder.join(PUBSPEC_LOCK_FILE);
    let config_path = package_config_path(folder);

    if !pubspec_path.is_file() {
        return Ok(None);
    }

    // If we don't appear to have deps listed in pubspec, then no point
    // checking further.
    let pubspec_content = std::fs::read_to_string(&pubspec_path)
        .with_context(|| format!("Failed to read {}", pubspec_path.display()))?;
    if !DEPENDENCIES_RE.is_match(&pubspec_content) {
        return Ok(None);
    }

    // If we don't have a package config, we probably need running.
    if !config_path.is_file() {
        return Ok(Some(PackageStatus::get_required(format!(
            "{} is missing",
            PACKAGE_CONFIG_FILE
        ))));
    }

    // A present-but-unparseable config (e.g. mid-write) only disables the
    // rules that need its contents.
    let package_config = match PackageConfig::load(&config_path) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!("{:#}", e);
            None
        }
    };

    // If the SDK version has changed by more than a patch since packages
    // were last fetched, prefer upgrade on the way up and get on the way
    // down.
    let last_used_version = package_config
        .as_ref()
        .and_then(PackageConfig::generator_sdk_version);
    if let (Some(last_used), Some(current)) = (last_used_version, sdks.dart_version.as_ref()) {
        let last_used_major_minor = Version::new(last_used.major, last_used.minor, 0);
        let current_major_minor = Version::new(current.major, current.minor, 0);

        info!(
            "Version last used for pub get is {} ({}), current is {} ({})",
            last_used, last_used_major_minor, current, current_major_minor
        );
        if current_major_minor > last_used_major_minor {
            return Ok(Some(PackageStatus::upgrade_required(format!(
                "The current SDK version ({}) is newer than the one last used to run \"pub get\" ({})",
                current_major_minor, last_used_major_minor
            ))));
        } else if current_major_minor < last_used_major_minor {
            return Ok(Some(PackageStatus::get_required(format!(
                "The current SDK version ({}) is older than the one last used to run \"pub get\" ({})",
                current_major_minor, last_used_major_minor
            ))));
        }
    }

    let pubspec_modified = modified_time(&pubspec_path)?;
    let lock_modified = if lock_path.is_file() {
        modified_time(&lock_path)?
    } else {
        pubspec_modified
    };
    let config_modified = modified_time(&config_path)?;

    if pubspec_modified > lock_modified {
        return Ok(Some(PackageStatus::get_required(format!(
            "{} was modified ({}) more recently than {} ({})",
            PUBSPEC_FILE,
            format_modified_time(pubspec_modified),
            PUBSPEC_LOCK_FILE,
            format_modified_time(lock_modified)
        ))));
    } else if lock_modified > config_modified {
        return Ok(Some(PackageStatus::get_required(format!(
            "{} was modified ({}) more recently than {} ({})",
            PUBSPEC_LOCK_FILE,
            format_modified_time(lock_modified),
            PACKAGE_CONFIG_FILE,
            format_modified_time(config_modified)
        ))));
    }

    // For a Flutter project, the resolved flutter package must live inside
    // the SDK currently in use.
    if let (Some(flutter_sdk), Some(config)) = (&sdks.flutter, &package_config) {
        if let Some(flutter_package) = config.package_root("flutter", &config_path) {
            if !is_within_path(&flutter_package, flutter_sdk) {
                return Ok(Some(PackageStatus::get_required(format!(
                    "The referenced Flutter package ({}) does not match the current SDK in use ({})",
                    flutter_package.display(),
                    flutter_sdk.display()
                ))));
            }
        }
    }

    Ok(None)
}

fn modified_time(path: &Path) -> Result<SystemTime> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to stat {}", path.display()))?;
    metadata
        .modified()
        .with_context(|| format!("No modification time for {}", path.display()))
}
