//! Month model

use super::Subject;
use serde::{Deserialize, Serialize};

/// One monthly unit of the syllabus, shown as a single branch of the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Month {
    /// Position of the unit in the season (1-based, unique within a structure)
    #[serde(rename = "month")]
    pub month_number: u32,

    /// Display title (e.g., "Foundations")
    pub title: String,

    /// Subjects covered during the month
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

impl Month {
    /// Create a month with no subjects
    ///
    /// # Arguments
    /// * `month_number` - 1-based unit number
    /// * `title` - Display title
    #[must_use]
    pub const fn new(month_number: u32, title: String) -> Self {
        Self {
            month_number,
            title,
            subjects: Vec::new(),
        }
    }

    /// Add a subject to the month
    pub fn add_subject(&mut self, subject: Subject) {
        self.subjects.push(subject);
    }

    /// Total number of chapters across all subjects of the month
    #[must_use]
    pub fn chapter_count(&self) -> usize {
        self.subjects.iter().map(Subject::chapter_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_month() -> Month {
        let mut month = Month::new(1, "Foundations".to_string());
        month.add_subject(
            Subject::new("Mathematics".to_string()).with_chapters(["A", "B", "C"]),
        );
        month.add_subject(
            Subject::new("Science".to_string()).with_chapters(["D", "E", "F", "G", "H"]),
        );
        month
    }

    #[test]
    fn test_chapter_count_sums_subjects() {
        assert_eq!(sample_month().chapter_count(), 8);
    }

    #[test]
    fn test_chapter_count_empty() {
        let month = Month::new(4, "Revision".to_string());
        assert_eq!(month.chapter_count(), 0);
    }
}
