//! Model of `.dart_tool/package_config.json`.
//!
//! The file records the concrete on-disk resolution `pub get` produced:
//! one entry per package with a root URI (absolute `file:` URI or a path
//! relative to the config file), plus the generator and SDK version that
//! wrote it.

use anyhow::{Context, Result};
use semver::Version;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;
use url::Url;

use crate::util::normalize_path;

/// Project-relative location of the package config file.
pub const PACKAGE_CONFIG_DIR: &str = ".dart_tool";
pub const PACKAGE_CONFIG_FILE: &str = "package_config.json";

/// Path of the package config file inside a project folder.
pub fn package_config_path(folder: &Path) -> PathBuf {
    folder.join(PACKAGE_CONFIG_DIR).join(PACKAGE_CONFIG_FILE)
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageConfig {
    #[serde(default)]
    #[allow(dead_code)]
    pub config_version: u32,
    #[serde(default)]
    pub packages: Vec<PackageEntry>,
    /// Tool that wrote the file, normally `"pub"`.
    #[serde(default)]
    pub generator: Option<String>,
    /// SDK version the generator ran under.
    #[serde(default)]
    pub generator_version: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageEntry {
    pub name: String,
    pub root_uri: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub package_uri: Option<String>,
}

impl PackageConfig {
    /// Parse the package config at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// The SDK version last used to run `pub get`, when this file was
    /// written by pub and carries a parseable version.
    pub fn generator_sdk_version(&self) -> Option<Version> {
        if self.generator.as_deref() != Some("pub") {
            return None;
        }
        let raw = self.generator_version.as_deref()?;
        match Version::parse(raw) {
            Ok(version) => Some(version),
            Err(e) => {
                warn!("Ignoring unparseable generatorVersion {:?}: {}", raw, e);
                None
            }
        }
    }

    /// Resolve the on-disk root of a named package. `config_path` is the
    /// location of the file this config was loaded from; relative root URIs
    /// are resolved against its directory.
    pub fn package_root(&self, name: &str, config_path: &Path) -> Option<PathBuf> {
        let entry = self.packages.iter().find(|p| p.name == name)?;
        resolve_root_uri(&entry.root_uri, config_path)
    }
}

fn resolve_root_uri(root_uri: &str, config_path: &Path) -> Option<PathBuf> {
    match Url::parse(root_uri) {
        Ok(url) if url.scheme() == "file" => url.to_file_path().ok(),
        // Not an absolute URL: treat as a path relative to the config file.
        _ => {
            let base = config_path.parent()?;
            Some(normalize_path(&base.join(root_uri)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(json: &str) -> PackageConfig {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn parses_generator_version() {
        let config = sample(
            r#"{
                "configVersion": 2,
                "packages": [],
                "generator": "pub",
                "generatorVersion": "3.4.1"
            }"#,
        );
        assert_eq!(config.generator_sdk_version(), Some(Version::new(3, 4, 1)));
    }

    #[test]
    fn non_pub_generator_has_no_version() {
        let config = sample(r#"{"generator": "bazel", "generatorVersion": "3.4.1"}"#);
        assert_eq!(config.generator_sdk_version(), None);
    }

    #[test]
    fn resolves_relative_root_uri_against_config_dir() {
        let config = sample(
            r#"{
                "packages": [
                    {"name": "app", "rootUri": "../", "packageUri": "lib/"},
                    {"name": "flutter", "rootUri": "../../sdk/flutter/packages/flutter", "packageUri": "lib/"}
                ]
            }"#,
        );
        let config_path = Path::new("/work/app/.dart_tool/package_config.json");
        assert_eq!(
            config.package_root("app", config_path),
            Some(PathBuf::from("/work/app"))
        );
        assert_eq!(
            config.package_root("flutter", config_path),
            Some(PathBuf::from("/work/sdk/flutter/packages/flutter"))
        );
    }

    #[test]
    fn resolves_file_uri() {
        let config = sample(
            r#"{"packages": [{"name": "flutter", "rootUri": "file:///opt/flutter/packages/flutter"}]}"#,
        );
        let config_path = Path::new("/work/app/.dart_tool/package_config.json");
        assert_eq!(
            config.package_root("flutter", config_path),
            Some(PathBuf::from("/opt/flutter/packages/flutter"))
        );
    }

    #[test]
    fn unknown_package_is_none() {
        let config = sample(r#"{"packages": []}"#);
        assert_eq!(
            config.package_root("flutter", Path::new("/x/.dart_tool/package_config.json")),
            None
        );
    }
}
