//! Unit card render model

use crate::core::models::Month;

/// Indicator shown at the right of a card header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderIndicator {
    /// Unlocked and open (chevron up)
    Expanded,
    /// Unlocked and closed (chevron down)
    Collapsed,
    /// Locked (padlock, no expand affordance)
    Locked,
}

impl HeaderIndicator {
    /// Terminal glyph for the indicator
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Expanded => "▲",
            Self::Collapsed => "▼",
            Self::Locked => "🔒",
        }
    }

    /// Stable name used in CSS classes and test assertions
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Expanded => "expanded",
            Self::Collapsed => "collapsed",
            Self::Locked => "locked",
        }
    }
}

/// Status shown in the card footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitStatus {
    /// The unit is open for study
    InProgress,
    /// The unit cannot be opened yet
    Locked,
}

impl UnitStatus {
    /// Footer label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::InProgress => "In Progress",
            Self::Locked => "Locked",
        }
    }
}

/// One clickable chapter row inside an expanded card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChapterRow<'a> {
    /// Index of the subject within the month
    pub subject_index: usize,
    /// Index of the chapter within the subject
    pub chapter_index: usize,
    /// Subject the chapter belongs to
    pub subject: &'a str,
    /// Chapter name
    pub chapter: &'a str,
}

/// Subject heading with its chapter rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectSection<'a> {
    /// Subject name
    pub subject: &'a str,
    /// Chapter rows in order
    pub rows: Vec<ChapterRow<'a>>,
}

/// Render model for one month card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitCard<'a> {
    /// Unit number shown in the badge
    pub month_number: u32,
    /// Unit title
    pub title: &'a str,
    /// Sum of chapter counts over all subjects
    pub chapter_count: usize,
    /// Whether the unlock policy opened this unit
    pub is_unlocked: bool,
    /// Whether this unit is the expanded one
    pub is_expanded: bool,
    /// Completion flag; nothing sets it yet
    pub completed: bool,
    /// Header indicator
    pub indicator: HeaderIndicator,
    /// Footer status
    pub status: UnitStatus,
    /// Subject sections, present only when expanded and unlocked
    pub body: Option<Vec<SubjectSection<'a>>>,
}

impl<'a> UnitCard<'a> {
    /// Build the card for a month
    ///
    /// # Arguments
    /// * `month` - The month to render
    /// * `is_unlocked` - Unlock policy decision for the month's index
    /// * `is_expanded` - Whether the month is the currently expanded one
    #[must_use]
    pub fn build(month: &'a Month, is_unlocked: bool, is_expanded: bool) -> Self {
        let indicator = match (is_unlocked, is_expanded) {
            (false, _) => HeaderIndicator::Locked,
            (true, true) => HeaderIndicator::Expanded,
            (true, false) => HeaderIndicator::Collapsed,
        };
        let status = if is_unlocked {
            UnitStatus::InProgress
        } else {
            UnitStatus::Locked
        };
        let body = (is_unlocked && is_expanded).then(|| Self::sections(month));

        Self {
            month_number: month.month_number,
            title: &month.title,
            chapter_count: month.chapter_count(),
            is_unlocked,
            is_expanded,
            completed: false,
            indicator,
            status,
            body,
        }
    }

    fn sections(month: &'a Month) -> Vec<SubjectSection<'a>> {
        month
            .subjects
            .iter()
            .enumerate()
            .map(|(subject_index, subject)| SubjectSection {
                subject: &subject.subject,
                rows: subject
                    .chapters
                    .iter()
                    .enumerate()
                    .map(|(chapter_index, chapter)| ChapterRow {
                        subject_index,
                        chapter_index,
                        subject: &subject.subject,
                        chapter,
                    })
                    .collect(),
            })
            .collect()
    }

    /// Chapter count label, e.g. "8 Chapters"
    #[must_use]
    pub fn chapter_label(&self) -> String {
        format!("{} Chapters", self.chapter_count)
    }

    /// Whether clicking the header does anything
    #[must_use]
    pub const fn is_toggleable(&self) -> bool {
        self.is_unlocked
    }

    /// Find a rendered chapter row; `None` when the body is hidden
    #[must_use]
    pub fn row(&self, subject_index: usize, chapter_index: usize) -> Option<&ChapterRow<'a>> {
        self.body
            .as_ref()?
            .get(subject_index)?
            .rows
            .get(chapter_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Subject;

    fn month() -> Month {
        let mut month = Month::new(1, "Foundations".to_string());
        month.add_subject(Subject::new("Mathematics".to_string()).with_chapters(["A", "B", "C"]));
        month.add_subject(
            Subject::new("Science".to_string()).with_chapters(["D", "E", "F", "G", "H"]),
        );
        month
    }

    #[test]
    fn test_chapter_label() {
        let month = month();
        let card = UnitCard::build(&month, true, false);
        assert_eq!(card.chapter_label(), "8 Chapters");
    }

    #[test]
    fn test_unlocked_expanded_card_has_body() {
        let month = month();
        let card = UnitCard::build(&month, true, true);
        assert_eq!(card.indicator, HeaderIndicator::Expanded);
        assert_eq!(card.status.label(), "In Progress");
        assert!(!card.completed);

        let body = card.body.as_ref().unwrap();
        assert_eq!(body.len(), 2);
        assert_eq!(body[1].subject, "Science");
        assert_eq!(body[1].rows[4].chapter, "H");
        assert_eq!(card.row(0, 2).map(|r| r.chapter), Some("C"));
    }

    #[test]
    fn test_unlocked_collapsed_card_hides_body() {
        let month = month();
        let card = UnitCard::build(&month, true, false);
        assert_eq!(card.indicator, HeaderIndicator::Collapsed);
        assert!(card.body.is_none());
        assert!(card.row(0, 0).is_none());
    }

    #[test]
    fn test_locked_card() {
        let month = month();
        let card = UnitCard::build(&month, false, true);
        assert_eq!(card.indicator, HeaderIndicator::Locked);
        assert_eq!(card.status.label(), "Locked");
        assert!(card.body.is_none());
        assert!(!card.is_toggleable());
    }
}
