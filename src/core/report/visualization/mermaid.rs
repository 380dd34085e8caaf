//! Mermaid diagram generator for the season tree
//!
//! Generates Mermaid flowchart syntax that can be embedded in Markdown files
//! and rendered by GitHub, GitLab, and other Markdown viewers.

use crate::core::tree::{Branch, TreeLayout};
use std::fmt::Write;

/// Generator for Mermaid diagram syntax
pub struct MermaidGenerator;

impl MermaidGenerator {
    /// Generate a top-to-bottom flowchart of the trunk
    ///
    /// Months are chained in order along the trunk. The expanded month links
    /// to one node per subject with its chapter count. Unlocked and locked
    /// months get distinct classes.
    #[must_use]
    pub fn generate_tree(layout: &TreeLayout) -> String {
        let mut output = String::from("```mermaid\nflowchart TB\n");

        for branch in &layout.branches {
            let id = Self::month_id(branch);
            let label = Self::get_node_label(branch);
            let _ = writeln!(output, "    {id}[\"{label}\"]");
        }

        output.push('\n');

        for pair in layout.branches.windows(2) {
            let _ = writeln!(
                output,
                "    {} --> {}",
                Self::month_id(&pair[0]),
                Self::month_id(&pair[1])
            );
        }

        // Subjects of the open card hang off their month
        for branch in &layout.branches {
            let Some(body) = &branch.card.body else {
                continue;
            };
            let month_id = Self::month_id(branch);
            for (subject_index, section) in body.iter().enumerate() {
                let subject_id = format!("{month_id}_S{subject_index}");
                let _ = writeln!(
                    output,
                    "    {subject_id}([\"{} ({})\"])",
                    Self::escape_label(section.subject),
                    section.rows.len()
                );
                let _ = writeln!(output, "    {month_id} -.-> {subject_id}");
            }
        }

        output.push('\n');
        output.push_str("    classDef unlocked fill:#fff7d6,stroke:#d4a017,stroke-width:2px\n");
        output.push_str("    classDef locked fill:#eeeeee,stroke:#999999,color:#777777\n");

        let (unlocked, locked): (Vec<_>, Vec<_>) = layout
            .branches
            .iter()
            .partition(|branch| branch.card.is_unlocked);
        for (class, branches) in [("unlocked", unlocked), ("locked", locked)] {
            if branches.is_empty() {
                continue;
            }
            let ids: Vec<String> = branches.into_iter().map(Self::month_id).collect();
            let _ = writeln!(output, "    class {} {class}", ids.join(","));
        }

        output.push_str("```\n");
        output
    }

    fn month_id(branch: &Branch) -> String {
        format!("M{}", branch.card.month_number)
    }

    /// Node label: unit number, title and chapter count
    fn get_node_label(branch: &Branch) -> String {
        let card = &branch.card;
        let lock = if card.is_unlocked { "" } else { " 🔒" };
        format!(
            "Unit {}: {}<br/>{}{lock}",
            card.month_number,
            Self::escape_label(card.title),
            card.chapter_label()
        )
    }

    /// Quotes would terminate the label early
    fn escape_label(label: &str) -> String {
        label.replace('"', "#quot;")
    }
}
