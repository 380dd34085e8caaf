//! Shared library for `SyllabusTree`
//! Contains the syllabus data model, the headless tree view and its renderers

pub mod core;
pub mod logger;

pub use self::core::*;
