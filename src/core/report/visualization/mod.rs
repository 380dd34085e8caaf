//! Visualization generation for the season tree
//!
//! Provides a generator for Mermaid diagrams embedded in Markdown reports.

pub mod mermaid;

pub use mermaid::MermaidGenerator;
