use anyhow::{Context, Result};
use std::path::PathBuf;

/// Resolve the workspace root folders for this invocation. Passed roots are
/// canonicalized; no roots means the current directory.
pub fn resolve_roots(roots: Vec<PathBuf>) -> Result<Vec<PathBuf>> {
    if roots.is_empty() {
        return Ok(vec![
            std::env::current_dir().context("Failed to get current directory")?
        ]);
    }
    roots
        .into_iter()
        .map(|root| {
            root.canonicalize()
                .with_context(|| format!("Failed to resolve workspace root: {}", root.display()))
        })
        .collect()
}
