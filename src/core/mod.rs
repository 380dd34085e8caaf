//! Core module for the syllabus tree

pub mod catalog;
pub mod config;
pub mod models;
pub mod report;
pub mod session;
pub mod tree;
pub mod view;
pub mod viewer;

/// Returns the current version of the `SyllabusTree` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
