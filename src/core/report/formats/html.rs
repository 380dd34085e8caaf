//! HTML report generator
//!
//! Generates a self-contained HTML page of the season tree with embedded CSS
//! and a small script for panning and Ctrl+wheel zoom. Pages
//! are rendered from askama templates under `templates/`.

use crate::core::report::ReportGenerator;
use crate::core::tree::Branch;
use crate::core::view::{EmptyState, TreeScene, ViewModel};
use crate::core::viewer::ViewerSettings;
use askama::Template;
use std::error::Error;

/// One chapter row, carrying the indices a click reports back
struct HtmlChapter<'a> {
    subject_index: usize,
    chapter_index: usize,
    name: &'a str,
}

struct HtmlSubject<'a> {
    name: &'a str,
    chapters: Vec<HtmlChapter<'a>>,
}

/// Flattened branch for the template
struct HtmlBranch<'a> {
    side: &'static str,
    node: &'static str,
    number: u32,
    title: &'a str,
    chapter_label: String,
    indicator: &'static str,
    glyph: &'static str,
    status: &'static str,
    unlocked: bool,
    expanded: bool,
    subjects: Vec<HtmlSubject<'a>>,
}

impl<'a> From<&Branch<'a>> for HtmlBranch<'a> {
    fn from(branch: &Branch<'a>) -> Self {
        let card = &branch.card;
        let subjects = card
            .body
            .iter()
            .flatten()
            .map(|section| HtmlSubject {
                name: section.subject,
                chapters: section
                    .rows
                    .iter()
                    .map(|row| HtmlChapter {
                        subject_index: row.subject_index,
                        chapter_index: row.chapter_index,
                        name: row.chapter,
                    })
                    .collect(),
            })
            .collect();

        Self {
            side: branch.side.as_str(),
            node: branch.node.as_str(),
            number: card.month_number,
            title: card.title,
            chapter_label: card.chapter_label(),
            indicator: card.indicator.as_str(),
            glyph: card.indicator.glyph(),
            status: card.status.label(),
            unlocked: card.is_unlocked,
            expanded: card.is_expanded,
            subjects,
        }
    }
}

#[derive(Template)]
#[template(path = "tree.html")]
struct TreePage<'a> {
    class_level: &'a str,
    badge: &'a str,
    transform: String,
    scale: f64,
    x: f64,
    y: f64,
    origin: &'static str,
    transition: &'static str,
    min_scale: f64,
    max_scale: f64,
    zoom_step: f64,
    wheel_sensitivity: f64,
    branches: Vec<HtmlBranch<'a>>,
}

#[derive(Template)]
#[template(path = "empty.html")]
struct EmptyPage<'a> {
    class_level: &'a str,
    message: &'a str,
    hint: &'a str,
}

/// HTML report generator with interactive pan and zoom
pub struct HtmlReporter {
    settings: ViewerSettings,
}

impl HtmlReporter {
    /// Create a new HTML reporter with the default zoom bounds
    #[must_use]
    pub fn new() -> Self {
        Self {
            settings: ViewerSettings::default(),
        }
    }

    /// Use custom zoom bounds in the embedded script
    #[must_use]
    pub const fn with_settings(settings: ViewerSettings) -> Self {
        Self { settings }
    }

    fn render_scene(&self, scene: &TreeScene) -> askama::Result<String> {
        TreePage {
            class_level: scene.class_level,
            badge: &scene.badge,
            transform: scene.transform.css(),
            scale: scene.transform.scale,
            x: scene.transform.position.x,
            y: scene.transform.position.y,
            origin: scene.origin,
            transition: scene.transition,
            min_scale: self.settings.min_scale,
            max_scale: self.settings.max_scale,
            zoom_step: self.settings.zoom_step,
            wheel_sensitivity: self.settings.wheel_sensitivity,
            branches: scene.layout.branches.iter().map(HtmlBranch::from).collect(),
        }
        .render()
    }

    fn render_empty(empty: &EmptyState) -> askama::Result<String> {
        EmptyPage {
            class_level: &empty.class_level,
            message: &empty.message,
            hint: &empty.hint,
        }
        .render()
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, model: &ViewModel) -> Result<String, Box<dyn Error>> {
        let page = match model {
            ViewModel::Empty(empty) => Self::render_empty(empty)?,
            ViewModel::Tree(scene) => self.render_scene(scene)?,
        };
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::SyllabusCatalog;
    use crate::core::view::SyllabusTreeView;

    fn page(class_level: &str) -> String {
        let catalog = SyllabusCatalog::builtin().unwrap();
        let view = SyllabusTreeView::new(catalog, class_level, |_: &str, _: &str| {});
        HtmlReporter::new().render(&view.render()).unwrap()
    }

    #[test]
    fn test_tree_page() {
        let html = page("10");
        assert!(html.contains("Season Mode: Class 10"));
        assert!(html.contains("transform: translate(0px, 0px) scale(1)"));
        assert!(html.contains("transform-origin: center top"));
        assert!(html.contains("data-scale=\"1\" data-x=\"0\" data-y=\"0\""));
        assert!(html.contains("class=\"branch left\""));
        assert!(html.contains("class=\"branch right\""));
        assert!(html.contains("data-month=\"1\""));
        assert!(html.contains("Real Numbers"));
        assert!(!html.contains("Quadratic Equations"));
        assert!(html.contains("In Progress"));
        assert!(html.contains("Locked"));
    }

    #[test]
    fn test_titles_are_escaped() {
        use crate::core::models::{Month, Subject, SyllabusStructure};

        let mut structure = SyllabusStructure::new("9".to_string());
        let mut month = Month::new(1, "Ratios & <Rates>".to_string());
        month.add_subject(Subject::new("Mathematics".to_string()).with_chapters(["A & B"]));
        structure.add_month(month);
        let catalog = SyllabusCatalog::from_structures(vec![structure]).unwrap();
        let view = SyllabusTreeView::new(catalog, "9", |_: &str, _: &str| {});
        let html = HtmlReporter::new().render(&view.render()).unwrap();

        assert!(html.contains("Ratios &amp; &lt;Rates&gt;"));
        assert!(html.contains("A &amp; B"));
        assert!(!html.contains("<Rates>"));
    }

    #[test]
    fn test_script_starts_from_rendered_transform() {
        use crate::core::view::Interaction;
        use crate::core::viewer::{Modifiers, MouseEvent, WheelEvent};

        let catalog = SyllabusCatalog::builtin().unwrap();
        let mut view = SyllabusTreeView::new(catalog, "10", |_: &str, _: &str| {});
        view.handle(Interaction::MouseDown(MouseEvent::at(100.0, 100.0)));
        view.handle(Interaction::MouseMove(MouseEvent::at(150.0, 130.0)));
        view.handle(Interaction::MouseUp);
        view.handle(Interaction::Wheel(WheelEvent::new(-100.0, Modifiers::CTRL)));
        let html = HtmlReporter::new().render(&view.render()).unwrap();

        assert!(html.contains("transform: translate(50px, 30px) scale(2)"));
        assert!(html.contains("data-scale=\"2\" data-x=\"50\" data-y=\"30\""));
        assert!(html.contains("var scale = parseFloat(ds.scale)"));
        assert!(!html.contains("var scale = 1,"));
    }

    #[test]
    fn test_empty_page() {
        let html = page("3");
        assert!(html.contains("No Season Plan available for Class 3"));
        assert!(html.contains("Select Class 9, 10, 11, or 12"));
        assert!(!html.contains("class=\"trunk\""));
    }
}
