//! Subject model

use serde::{Deserialize, Serialize};

/// A subject taught during one monthly unit, with its ordered chapters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Subject name (e.g., "Mathematics", "Science")
    pub subject: String,

    /// Chapter names in teaching order
    #[serde(default)]
    pub chapters: Vec<String>,
}

impl Subject {
    /// Create a subject with no chapters
    ///
    /// # Arguments
    /// * `subject` - Subject name
    #[must_use]
    pub const fn new(subject: String) -> Self {
        Self {
            subject,
            chapters: Vec::new(),
        }
    }

    /// Builder-style helper that appends chapters in order
    #[must_use]
    pub fn with_chapters<I, S>(mut self, chapters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.chapters.extend(chapters.into_iter().map(Into::into));
        self
    }

    /// Number of chapters in this subject
    #[must_use]
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }
}
