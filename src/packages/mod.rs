//! Package-management status and actions.
//!
//! Decides whether `pub get` / `pub upgrade` is probably required for a
//! project (with the reason surfaced to the user), and offers the
//! prompt-and-run flows that act on that decision.

mod actions;
mod config_file;
mod status;

// Re-exports
pub use actions::{
    prompt_to_run_pub_get, prompt_to_run_pub_upgrade, run_pub_get, run_pub_upgrade,
};
pub use status::{evaluate_package_status, PackageStatus, PUBSPEC_LOCK_FILE};
