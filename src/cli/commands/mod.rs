//! CLI command handlers for `SyllabusTree`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod classes;
pub mod config;
pub mod session;
pub mod show;

use syllabus_tree::catalog::SyllabusCatalog;
use syllabus_tree::error;

/// Load the compiled-in season plans
///
/// # Errors
/// Returns a user-facing message if the bundled data is malformed
pub fn load_catalog() -> Result<SyllabusCatalog, String> {
    SyllabusCatalog::builtin().map_err(|e| {
        error!("Built-in season plans failed to load: {e}");
        format!("✗ Failed to load season plans: {e}")
    })
}
