//! Small path and time helpers shared across modules.

use chrono::{DateTime, Local};
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

/// Render a path relative to the home directory (`~/...`) when it is inside
/// it, otherwise as-is.
pub fn home_relative_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(rel) = path.strip_prefix(&home) {
            if rel.as_os_str().is_empty() {
                return "~".to_string();
            }
            return format!("~/{}", rel.display());
        }
    }
    path.display().to_string()
}

/// Lexically normalize a path, resolving `.` and `..` components without
/// touching the filesystem.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(Component::ParentDir);
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Whether `child` is located inside `parent` (or equals it), compared
/// lexically after normalization.
pub fn is_within_path(child: &Path, parent: &Path) -> bool {
    normalize_path(child).starts_with(normalize_path(parent))
}

/// Format a file modification time for display in status reasons.
pub fn format_modified_time(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format("%Y-%m-%d %H:%M:%S%.3f")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_resolves_dots() {
        assert_eq!(
            normalize_path(Path::new("/a/b/../c/./d")),
            PathBuf::from("/a/c/d")
        );
        assert_eq!(normalize_path(Path::new("a/../..")), PathBuf::from(".."));
    }

    #[test]
    fn within_path_checks_containment() {
        assert!(is_within_path(
            Path::new("/sdk/flutter/packages/flutter"),
            Path::new("/sdk/flutter")
        ));
        assert!(is_within_path(
            Path::new("/sdk/flutter/bin/../packages"),
            Path::new("/sdk/flutter")
        ));
        assert!(!is_within_path(
            Path::new("/other/flutter/packages/flutter"),
            Path::new("/sdk/flutter")
        ));
        // A sibling that merely shares a name prefix is outside.
        assert!(!is_within_path(
            Path::new("/sdk/flutter-old/packages"),
            Path::new("/sdk/flutter")
        ));
    }
}
