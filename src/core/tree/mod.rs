//! Syllabus tree: trunk layout, unit cards and the unlock policy

pub mod card;
pub mod layout;
pub mod unlock;

pub use card::{ChapterRow, HeaderIndicator, SubjectSection, UnitCard, UnitStatus};
pub use layout::{Branch, NodeStyle, Side, TreeLayout};
pub use unlock::{FirstUnitOnly, UnlockPolicy};
