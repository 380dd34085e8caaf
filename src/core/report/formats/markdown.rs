//! Markdown report generator
//!
//! Generates season reports in Markdown format with an embedded Mermaid
//! diagram of the trunk. These reports render well in GitHub, GitLab, and VS Code.

use crate::core::report::visualization::MermaidGenerator;
use crate::core::report::ReportGenerator;
use crate::core::view::{EmptyState, TreeScene, ViewModel};
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, scene: &TreeScene) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();
        let layout = &scene.layout;

        // Substitute header metadata
        output = output.replace("{{badge}}", &scene.badge);
        output = output.replace("{{class_level}}", scene.class_level);
        output = output.replace("{{unit_count}}", &layout.branches.len().to_string());
        output = output.replace(
            "{{chapter_count}}",
            &layout
                .branches
                .iter()
                .map(|b| b.card.chapter_count)
                .sum::<usize>()
                .to_string(),
        );
        output = output.replace("{{unlocked_count}}", &layout.unlocked_count().to_string());

        let expanded = layout
            .branches
            .iter()
            .find(|b| b.card.is_expanded)
            .map_or_else(|| "none".to_string(), |b| b.card.month_number.to_string());
        output = output.replace("{{expanded_unit}}", &expanded);

        output = output.replace("{{season_table}}", &Self::generate_season_table(scene));
        output = output.replace(
            "{{mermaid_diagram}}",
            &MermaidGenerator::generate_tree(layout),
        );
        output = output.replace("{{open_unit}}", &Self::generate_open_unit(scene));

        // Substitute view state
        output = output.replace("{{transform}}", &scene.transform.css());
        output = output.replace("{{origin}}", scene.origin);
        output = output.replace("{{transition}}", scene.transition);

        output
    }

    /// Generate the unit-by-unit overview table
    fn generate_season_table(scene: &TreeScene) -> String {
        let mut table = String::new();

        table.push_str("| Unit | Title | Side | Chapters | Status |\n");
        table.push_str("|---|---|---|---|---|\n");

        for branch in &scene.layout.branches {
            let card = &branch.card;
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} | {} {} |",
                card.month_number,
                Self::escape_cell(card.title),
                branch.side.as_str(),
                card.chapter_count,
                card.indicator.glyph(),
                card.status.label()
            );
        }

        table
    }

    /// Generate the subject and chapter lists of the expanded unit
    fn generate_open_unit(scene: &TreeScene) -> String {
        let open = scene
            .layout
            .branches
            .iter()
            .find_map(|b| b.card.body.as_ref().map(|body| (&b.card, body)));

        let Some((card, body)) = open else {
            return "_No unit is expanded._\n".to_string();
        };

        let mut section = String::new();
        let _ = writeln!(
            section,
            "### Unit {}: {} ({})\n",
            card.month_number,
            card.title,
            card.chapter_label()
        );
        for subject in body {
            let _ = writeln!(section, "**{}**\n", subject.subject);
            for row in &subject.rows {
                let _ = writeln!(section, "{}. {}", row.chapter_index + 1, row.chapter);
            }
            section.push('\n');
        }
        section
    }

    fn generate_empty(empty: &EmptyState) -> String {
        format!("# {}\n\n{}\n", empty.message, empty.hint)
    }

    /// Pipes would split the table cell
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|")
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, model: &ViewModel) -> Result<String, Box<dyn Error>> {
        Ok(match model {
            ViewModel::Empty(empty) => Self::generate_empty(empty),
            ViewModel::Tree(scene) => self.render_template(scene),
        })
    }
}
