//! Student progress model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Progress record supplied by the caller
///
/// The tree accepts it and hands it to the unlock policy. The default policy
/// does not read it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentSyllabusProgress {
    /// Student identifier, if known
    #[serde(default)]
    pub student_id: Option<String>,

    /// Class level the progress refers to
    #[serde(default)]
    pub class_level: String,

    /// Completed chapters, keyed by subject name
    #[serde(default)]
    pub completed_chapters: BTreeMap<String, Vec<String>>,
}

impl StudentSyllabusProgress {
    /// Create an empty progress record for a class level
    #[must_use]
    pub const fn new(class_level: String) -> Self {
        Self {
            student_id: None,
            class_level,
            completed_chapters: BTreeMap::new(),
        }
    }

    /// Record a completed chapter
    pub fn mark_completed(&mut self, subject: &str, chapter: &str) {
        let chapters = self
            .completed_chapters
            .entry(subject.to_string())
            .or_default();
        if !chapters.iter().any(|c| c == chapter) {
            chapters.push(chapter.to_string());
        }
    }

    /// Whether a chapter has been recorded as completed
    #[must_use]
    pub fn is_completed(&self, subject: &str, chapter: &str) -> bool {
        self.completed_chapters
            .get(subject)
            .is_some_and(|chapters| chapters.iter().any(|c| c == chapter))
    }
}
