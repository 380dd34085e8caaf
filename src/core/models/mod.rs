//! Data models for `SyllabusTree`

pub mod month;
pub mod progress;
pub mod structure;
pub mod subject;

pub use month::Month;
pub use progress::StudentSyllabusProgress;
pub use structure::SyllabusStructure;
pub use subject::Subject;
