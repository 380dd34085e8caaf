//! Syllabus tree view
//!
//! The interactive component: holds the loaded season plan, the viewer, the
//! single expanded month and the unlock policy, applies user interactions
//! and produces a [`ViewModel`] for the renderers.

use crate::core::catalog::SyllabusCatalog;
use crate::core::models::{StudentSyllabusProgress, SyllabusStructure};
use crate::core::tree::{FirstUnitOnly, TreeLayout, UnlockPolicy};
use crate::core::viewer::{
    MouseEvent, TouchEvent, ViewTransform, Viewer, ViewerSettings, WheelEvent, TRANSFORM_ORIGIN,
};
use crate::{debug, info};

/// A single user interaction with the tree
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    /// Mouse button pressed over the viewport
    MouseDown(MouseEvent),
    /// Mouse moved over the viewport
    MouseMove(MouseEvent),
    /// Mouse button released
    MouseUp,
    /// Mouse left the viewport
    MouseLeave,
    /// Finger placed on the viewport
    TouchStart(TouchEvent),
    /// Finger moved on the viewport
    TouchMove(TouchEvent),
    /// Finger lifted
    TouchEnd,
    /// Scroll wheel
    Wheel(WheelEvent),
    /// Zoom-in control
    ZoomIn,
    /// Zoom-out control
    ZoomOut,
    /// Reset-view control
    ResetView,
    /// Click on a month card header
    ToggleMonth(u32),
    /// Click on a chapter row of an expanded card
    ClickChapter {
        /// Month the row belongs to
        month: u32,
        /// Subject index within the month
        subject_index: usize,
        /// Chapter index within the subject
        chapter_index: usize,
    },
    /// Switch to another class level
    SetClassLevel(String),
}

/// Shown instead of the tree when no plan exists for the class level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Requested class level
    pub class_level: String,
    /// Main message
    pub message: String,
    /// Hint naming the valid class levels
    pub hint: String,
}

/// Everything needed to draw the tree
#[derive(Debug, Clone, PartialEq)]
pub struct TreeScene<'a> {
    /// Class level being shown
    pub class_level: &'a str,
    /// Badge text, e.g. "Season Mode: Class 10"
    pub badge: String,
    /// Pan and zoom applied to the content layer
    pub transform: ViewTransform,
    /// Transform origin of the content layer
    pub origin: &'static str,
    /// Transition of the content layer
    pub transition: &'static str,
    /// Trunk and branches
    pub layout: TreeLayout<'a>,
}

/// Render model produced by [`SyllabusTreeView::render`]
#[derive(Debug, Clone, PartialEq)]
pub enum ViewModel<'a> {
    /// No plan for the requested class level
    Empty(EmptyState),
    /// The season tree
    Tree(TreeScene<'a>),
}

/// Interactive syllabus tree for one class level
///
/// `N` receives `(subject, chapter)` once per chapter-row click.
pub struct SyllabusTreeView<N>
where
    N: FnMut(&str, &str),
{
    catalog: SyllabusCatalog,
    class_level: String,
    structure: Option<SyllabusStructure>,
    viewer: Viewer,
    expanded_month: Option<u32>,
    policy: Box<dyn UnlockPolicy>,
    progress: Option<StudentSyllabusProgress>,
    on_navigate: N,
}

impl<N> SyllabusTreeView<N>
where
    N: FnMut(&str, &str),
{
    /// Create a view and load the plan for `class_level`
    ///
    /// # Arguments
    /// * `catalog` - Lookup table of season plans
    /// * `class_level` - Class level to show
    /// * `on_navigate` - Called with `(subject, chapter)` when a chapter row is clicked
    #[must_use]
    pub fn new(catalog: SyllabusCatalog, class_level: &str, on_navigate: N) -> Self {
        let mut view = Self {
            catalog,
            class_level: String::new(),
            structure: None,
            viewer: Viewer::default(),
            expanded_month: None,
            policy: Box::new(FirstUnitOnly),
            progress: None,
            on_navigate,
        };
        view.set_class_level(class_level);
        view
    }

    /// Replace the viewer settings; resets the view transform
    #[must_use]
    pub fn with_viewer_settings(mut self, settings: ViewerSettings) -> Self {
        self.viewer = Viewer::new(settings);
        self
    }

    /// Replace the unlock policy
    #[must_use]
    pub fn with_policy(mut self, policy: impl UnlockPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self.expanded_month = self.default_expanded();
        self
    }

    /// Attach a progress record
    #[must_use]
    pub fn with_progress(mut self, progress: Option<StudentSyllabusProgress>) -> Self {
        self.progress = progress;
        self.expanded_month = self.default_expanded();
        self
    }

    /// Load the plan for another class level
    ///
    /// Unknown levels leave the view in the empty state. The view transform
    /// is kept; the expanded month returns to its default.
    pub fn set_class_level(&mut self, class_level: &str) {
        self.class_level = class_level.trim().to_string();
        self.structure = self.catalog.get(&self.class_level).cloned();

        match &self.structure {
            Some(structure) => debug!(
                "Loaded season plan for class {} ({} months)",
                self.class_level,
                structure.months.len()
            ),
            None => info!("No season plan for class '{}'", self.class_level),
        }
        self.expanded_month = self.default_expanded();
    }

    /// The first month starts open when it is unlocked
    fn default_expanded(&self) -> Option<u32> {
        let first = self.structure.as_ref()?.months.first()?;
        self.policy
            .is_unlocked(0, self.progress.as_ref())
            .then_some(first.month_number)
    }

    fn month_unlocked(&self, month_number: u32) -> Option<bool> {
        let index = self.structure.as_ref()?.index_of(month_number)?;
        Some(self.policy.is_unlocked(index, self.progress.as_ref()))
    }

    /// Toggle a month card
    ///
    /// Expanding a month collapses any other. Locked or unknown months are
    /// left alone.
    ///
    /// # Returns
    /// `true` if the expanded month changed
    pub fn toggle_month(&mut self, month_number: u32) -> bool {
        match self.month_unlocked(month_number) {
            Some(true) => {
                self.expanded_month = if self.expanded_month == Some(month_number) {
                    None
                } else {
                    Some(month_number)
                };
                debug!("Expanded month is now {:?}", self.expanded_month);
                true
            }
            Some(false) => {
                debug!("Ignoring toggle of locked month {month_number}");
                false
            }
            None => {
                debug!("Ignoring toggle of unknown month {month_number}");
                false
            }
        }
    }

    /// Click a chapter row
    ///
    /// Rows exist only inside the expanded, unlocked card; clicks anywhere
    /// else are ignored. The click never changes the expanded month.
    ///
    /// # Returns
    /// `true` if the navigation callback was invoked
    pub fn click_chapter(
        &mut self,
        month_number: u32,
        subject_index: usize,
        chapter_index: usize,
    ) -> bool {
        let Some(structure) = self.structure.as_ref() else {
            return false;
        };
        let layout = TreeLayout::build(
            structure,
            self.expanded_month,
            self.policy.as_ref(),
            self.progress.as_ref(),
        );
        let Some(card) = layout.branch(month_number).map(|branch| &branch.card) else {
            debug!("Ignoring chapter click in unknown month {month_number}");
            return false;
        };
        let Some(row) = card.row(subject_index, chapter_index) else {
            debug!("Chapter row {subject_index}/{chapter_index} in month {month_number} is not visible");
            return false;
        };
        let (subject, chapter) = (row.subject, row.chapter);

        info!("Navigating to {subject} / {chapter}");
        (self.on_navigate)(subject, chapter);
        true
    }

    /// Apply an interaction
    ///
    /// # Returns
    /// `true` if the interaction changed state or triggered navigation
    pub fn handle(&mut self, interaction: Interaction) -> bool {
        match interaction {
            Interaction::MouseDown(event) => {
                self.viewer.begin_drag(&event);
                self.viewer.is_dragging()
            }
            Interaction::TouchStart(event) => {
                self.viewer.begin_drag(&event);
                self.viewer.is_dragging()
            }
            Interaction::MouseMove(event) => self.viewer.drag_to(&event),
            Interaction::TouchMove(event) => self.viewer.drag_to(&event),
            Interaction::MouseUp | Interaction::MouseLeave | Interaction::TouchEnd => {
                let was_dragging = self.viewer.is_dragging();
                self.viewer.end_drag();
                was_dragging
            }
            Interaction::Wheel(event) => self.viewer.wheel(&event),
            Interaction::ZoomIn => {
                self.viewer.zoom_in();
                true
            }
            Interaction::ZoomOut => {
                self.viewer.zoom_out();
                true
            }
            Interaction::ResetView => {
                self.viewer.reset();
                true
            }
            Interaction::ToggleMonth(month) => self.toggle_month(month),
            Interaction::ClickChapter {
                month,
                subject_index,
                chapter_index,
            } => self.click_chapter(month, subject_index, chapter_index),
            Interaction::SetClassLevel(level) => {
                self.set_class_level(&level);
                true
            }
        }
    }

    /// Build the render model for the current state
    #[must_use]
    pub fn render(&self) -> ViewModel<'_> {
        let Some(structure) = &self.structure else {
            return ViewModel::Empty(EmptyState {
                class_level: self.class_level.clone(),
                message: format!("No Season Plan available for Class {}", self.class_level),
                hint: self.catalog.selection_hint(),
            });
        };

        ViewModel::Tree(TreeScene {
            class_level: &self.class_level,
            badge: format!("Season Mode: Class {}", self.class_level),
            transform: self.viewer.transform(),
            origin: TRANSFORM_ORIGIN,
            transition: self.viewer.transition(),
            layout: TreeLayout::build(
                structure,
                self.expanded_month,
                self.policy.as_ref(),
                self.progress.as_ref(),
            ),
        })
    }

    /// Currently expanded month number
    #[must_use]
    pub const fn expanded_month(&self) -> Option<u32> {
        self.expanded_month
    }

    /// Viewer state
    #[must_use]
    pub const fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /// Requested class level
    #[must_use]
    pub fn class_level(&self) -> &str {
        &self.class_level
    }

    /// Loaded season plan, if the class level is known
    #[must_use]
    pub const fn structure(&self) -> Option<&SyllabusStructure> {
        self.structure.as_ref()
    }

    /// Attached progress record
    #[must_use]
    pub const fn progress(&self) -> Option<&StudentSyllabusProgress> {
        self.progress.as_ref()
    }
}
