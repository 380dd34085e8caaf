//! Syllabus structure model

use super::Month;
use serde::{Deserialize, Serialize};

/// The full season plan for one class level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllabusStructure {
    /// Class level this plan belongs to (e.g., "10")
    pub class_level: String,

    /// Monthly units in display order
    #[serde(default)]
    pub months: Vec<Month>,
}

impl SyllabusStructure {
    /// Create an empty structure for a class level
    #[must_use]
    pub const fn new(class_level: String) -> Self {
        Self {
            class_level,
            months: Vec::new(),
        }
    }

    /// Append a month, keeping insertion order
    ///
    /// # Returns
    /// `true` if the month was added, `false` if its number is already taken
    pub fn add_month(&mut self, month: Month) -> bool {
        if self.get_month(month.month_number).is_some() {
            return false;
        }
        self.months.push(month);
        true
    }

    /// Get a month by its number
    #[must_use]
    pub fn get_month(&self, month_number: u32) -> Option<&Month> {
        self.months.iter().find(|m| m.month_number == month_number)
    }

    /// Index of a month within the display order
    #[must_use]
    pub fn index_of(&self, month_number: u32) -> Option<usize> {
        self.months
            .iter()
            .position(|m| m.month_number == month_number)
    }

    /// Total chapters across the whole season
    #[must_use]
    pub fn chapter_count(&self) -> usize {
        self.months.iter().map(Month::chapter_count).sum()
    }

    /// Check that month numbers are positive and unique
    ///
    /// # Errors
    /// Returns a description of the first offending month
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = Vec::with_capacity(self.months.len());
        for month in &self.months {
            if month.month_number == 0 {
                return Err(format!(
                    "Class {}: month '{}' has number 0; month numbers start at 1",
                    self.class_level, month.title
                ));
            }
            if seen.contains(&month.month_number) {
                return Err(format!(
                    "Class {}: month number {} appears more than once",
                    self.class_level, month.month_number
                ));
            }
            seen.push(month.month_number);
        }
        Ok(())
    }
}
