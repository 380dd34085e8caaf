//! Show command handler
//!
//! Renders the initial view of a class level's season tree as text,
//! Markdown or HTML.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use syllabus_tree::config::Config;
use syllabus_tree::report::{self, ReportFormat};
use syllabus_tree::view::SyllabusTreeView;
use syllabus_tree::{error, info};

/// Run the show command.
///
/// # Arguments
/// * `class` - Class level; falls back to config `default_class`
/// * `format_str` - Output format (text, markdown, html)
/// * `output` - Optional output path; `-` forces stdout
/// * `config` - Configuration with viewer bounds and the reports directory
pub fn run(class: Option<&str>, format_str: &str, output: Option<&Path>, config: &Config) {
    let class_level = class.unwrap_or(&config.syllabus.default_class);
    if let Err(err) = show(class_level, format_str, output, config) {
        error!("Rendering class {class_level} failed: {err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

/// Where the rendered view goes
#[derive(Debug, PartialEq, Eq)]
enum Destination {
    Stdout,
    File(PathBuf),
}

/// Text prints unless a file is named; Markdown and HTML land in the
/// reports directory unless told otherwise.
fn destination(
    class_level: &str,
    format: ReportFormat,
    output: Option<&Path>,
    reports_dir: &str,
) -> Destination {
    match output {
        Some(path) if path == Path::new("-") => Destination::Stdout,
        Some(path) => Destination::File(path.to_path_buf()),
        None if format == ReportFormat::Text => Destination::Stdout,
        None => {
            let safe_level: String = class_level
                .chars()
                .map(|c| if c.is_alphanumeric() { c } else { '_' })
                .collect();
            Destination::File(
                PathBuf::from(reports_dir)
                    .join(format!("class_{safe_level}_tree.{}", format.extension())),
            )
        }
    }
}

fn show(
    class_level: &str,
    format_str: &str,
    output: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    let format = ReportFormat::from_str(format_str)
        .map_err(|e| format!("✗ {e}. Use: text, markdown, or html"))?;

    let catalog = super::load_catalog()?;
    let settings = config.viewer_settings();
    let view = SyllabusTreeView::new(catalog, class_level, |_: &str, _: &str| {})
        .with_viewer_settings(settings);
    let model = view.render();
    let generator = report::generator(format, settings);

    match destination(class_level, format, output, &config.paths.reports_dir) {
        Destination::Stdout => {
            let rendered = generator
                .render(&model)
                .map_err(|e| format!("✗ Failed to render view: {e}"))?;
            print!("{rendered}");
        }
        Destination::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| {
                    format!("✗ Failed to create directory {}: {e}", parent.display())
                })?;
            }
            generator
                .generate(&model, &path)
                .map_err(|e| format!("✗ Failed to write {}: {e}", path.display()))?;
            println!("✓ Report generated: {}", path.display());
            info!("Report exported to: {}", path.display());
        }
    }

    Ok(())
}
