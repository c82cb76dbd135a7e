//! Dart and Flutter SDK discovery.
//!
//! Locates the SDK roots from CLI overrides, environment variables or the
//! `dart` executable on PATH, and reads the SDK's `version` file so the
//! status evaluator can compare it against the version last used for
//! `pub get`.

use semver::Version;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Environment variable naming the Dart SDK root.
pub const DART_SDK_ENV: &str = "DART_SDK";

/// Environment variable naming the Flutter SDK root.
pub const FLUTTER_ROOT_ENV: &str = "FLUTTER_ROOT";

/// Errors reading an SDK's version file.
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("could not read SDK version file at {path}")]
    VersionUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("SDK version file at {path} contains an invalid version {value:?}")]
    VersionInvalid {
        path: PathBuf,
        value: String,
        #[source]
        source: semver::Error,
    },
}

/// The SDKs available to the current invocation.
///
/// Any of the fields may be absent; status rules that need a missing SDK
/// simply fall through.
#[derive(Debug, Clone, Default)]
pub struct Sdks {
    /// Dart SDK root directory.
    pub dart: Option<PathBuf>,
    /// Version of the Dart SDK, from its `version` file.
    pub dart_version: Option<Version>,
    /// Flutter SDK root directory.
    pub flutter: Option<PathBuf>,
}

impl Sdks {
    /// Discover SDK roots from overrides, environment and PATH.
    pub fn discover(dart_override: Option<PathBuf>, flutter_override: Option<PathBuf>) -> Self {
        let flutter = flutter_override
            .or_else(|| std::env::var_os(FLUTTER_ROOT_ENV).map(PathBuf::from))
            .filter(|p| p.is_dir());

        let dart = dart_override
            .or_else(|| std::env::var_os(DART_SDK_ENV).map(PathBuf::from))
            .or_else(find_dart_sdk_on_path)
            // Flutter bundles a Dart SDK; use it when nothing else is found.
            .or_else(|| {
                flutter
                    .as_ref()
                    .map(|f| f.join("bin").join("cache").join("dart-sdk"))
            })
            .filter(|p| p.is_dir());

        let dart_version = dart.as_ref().and_then(|root| match read_sdk_version(root) {
            Ok(version) => Some(version),
            Err(e) => {
                warn!("Could not determine Dart SDK version: {:#}", anyhow::Error::from(e));
                None
            }
        });

        debug!(
            "SDK discovery: dart={:?} version={:?} flutter={:?}",
            dart, dart_version, flutter
        );

        Sdks {
            dart,
            dart_version,
            flutter,
        }
    }
}

/// Read and parse the `version` file at an SDK root.
///
/// Dart SDKs ship a single-line `version` file (for example
/// `3.4.1 (stable) ...` in dev builds); only the first token is parsed.
pub fn read_sdk_version(sdk_root: &Path) -> Result<Version, SdkError> {
    let path = sdk_root.join("version");
    let content = std::fs::read_to_string(&path).map_err(|source| SdkError::VersionUnreadable {
        path: path.clone(),
        source,
    })?;
    let value = content
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string();
    Version::parse(&value).map_err(|source| SdkError::VersionInvalid {
        path,
        value,
        source,
    })
}

/// Locate the Dart SDK root by finding `dart` on PATH.
///
/// The SDK root is the parent of the `bin` directory the executable lives in.
fn find_dart_sdk_on_path() -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    for dir in std::env::split_paths(&path_var) {
        let candidate = dir.join(dart_executable_name());
        if candidate.is_file() && dir.file_name().and_then(|n| n.to_str()) == Some("bin") {
            if let Some(root) = dir.parent() {
                return Some(root.to_path_buf());
            }
        }
    }
    None
}

fn dart_executable_name() -> &'static str {
    if cfg!(windows) {
        "dart.exe"
    } else {
        "dart"
    }
}
