//! Report generation for the syllabus tree
//!
//! Renders a [`ViewModel`] as terminal text, Markdown (with a Mermaid
//! diagram of the trunk) or a self-contained HTML page.

pub mod formats;
pub mod visualization;

use crate::core::view::ViewModel;
use crate::core::viewer::ViewerSettings;
use std::error::Error;
use std::fs;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat, TextRenderer};
pub use visualization::MermaidGenerator;

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, model: &ViewModel) -> Result<String, Box<dyn Error>>;

    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, model: &ViewModel, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(model)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }
}

/// Pick the generator for a format
///
/// `settings` feeds the zoom bounds of the interactive HTML page.
#[must_use]
pub fn generator(format: ReportFormat, settings: ViewerSettings) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Text => Box::new(TextRenderer::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::with_settings(settings)),
    }
}

/// Render a model in the given format with default viewer settings
///
/// # Errors
/// Returns an error if the chosen generator fails
pub fn render(format: ReportFormat, model: &ViewModel) -> Result<String, Box<dyn Error>> {
    generator(format, ViewerSettings::default()).render(model)
}
