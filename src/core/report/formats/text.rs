//! Terminal text renderer
//!
//! Draws the trunk as a vertical line with each month card on its side.
//! Chapter rows of the expanded card are numbered so they can be clicked
//! from an interaction script (`chapter MONTH SUBJECT CHAPTER`).

use crate::core::report::ReportGenerator;
use crate::core::tree::{Branch, Side};
use crate::core::view::{TreeScene, ViewModel};
use std::error::Error;
use std::fmt::Write;

/// Default width of the column left of the trunk
const DEFAULT_SIDE_WIDTH: usize = 40;

const TRUNK: char = '│';

/// Plain-text tree renderer
pub struct TextRenderer {
    side_width: usize,
}

impl TextRenderer {
    /// Create a renderer with the default column width
    #[must_use]
    pub const fn new() -> Self {
        Self {
            side_width: DEFAULT_SIDE_WIDTH,
        }
    }

    /// Truncate a line to `width` characters, marking the cut with an ellipsis
    fn fit(line: &str, width: usize) -> String {
        if line.chars().count() <= width {
            return line.to_string();
        }
        let mut cut: String = line.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }

    fn card_lines(branch: &Branch) -> Vec<String> {
        let card = &branch.card;
        let mut lines = vec![format!(
            "[{}] {} · {} {}",
            card.month_number,
            card.title,
            card.chapter_label(),
            card.indicator.glyph()
        )];

        if let Some(body) = &card.body {
            for (subject_number, section) in body.iter().enumerate() {
                lines.push(format!(
                    "  {}. {}",
                    subject_number + 1,
                    section.subject.to_uppercase()
                ));
                for row in &section.rows {
                    lines.push(format!("     {}) {}", row.chapter_index + 1, row.chapter));
                }
            }
        }

        lines.push(format!("  ~ {} ~", card.status.label()));
        lines
    }

    fn write_branch(&self, out: &mut String, branch: &Branch) {
        let width = self.side_width;
        let node = branch.node.glyph();

        for (i, line) in Self::card_lines(branch).iter().enumerate() {
            let is_header = i == 0;
            match branch.side {
                Side::Left => {
                    let text = Self::fit(line, width);
                    if is_header {
                        let _ = writeln!(out, "{text:<width$} ──{node}");
                    } else {
                        let _ = writeln!(out, "{text:<width$}   {TRUNK}");
                    }
                }
                Side::Right => {
                    if is_header {
                        let _ = writeln!(out, "{:width$}   {node}── {line}", "");
                    } else {
                        let _ = writeln!(out, "{:width$}   {TRUNK}    {line}", "");
                    }
                }
            }
        }
        let _ = writeln!(out, "{:width$}   {TRUNK}", "");
    }

    fn render_scene(&self, scene: &TreeScene) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", scene.badge);
        let _ = writeln!(
            out,
            "View: {} (origin {}, transition {})",
            scene.transform.css(),
            scene.origin,
            scene.transition
        );
        let _ = writeln!(out);

        let width = self.side_width;
        let _ = writeln!(out, "{:width$}   {TRUNK}", "");
        for branch in &scene.layout.branches {
            self.write_branch(&mut out, branch);
        }
        out
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextRenderer {
    fn render(&self, model: &ViewModel) -> Result<String, Box<dyn Error>> {
        Ok(match model {
            ViewModel::Empty(empty) => format!("{}\n{}\n", empty.message, empty.hint),
            ViewModel::Tree(scene) => self.render_scene(scene),
        })
    }
}
