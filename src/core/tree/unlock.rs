//! Unlock policy
//!
//! Decides which units of the season may be opened. Rendering code only ever
//! asks through [`UnlockPolicy`], so progress-driven rules can replace the
//! default without touching layout or card code.

use crate::core::models::StudentSyllabusProgress;

/// Decides whether the unit at a display index is unlocked
pub trait UnlockPolicy {
    /// Whether the unit at `unit_index` may be expanded and browsed
    fn is_unlocked(&self, unit_index: usize, progress: Option<&StudentSyllabusProgress>) -> bool;
}

/// Only the first unit of the season is unlocked; progress is not consulted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstUnitOnly;

impl UnlockPolicy for FirstUnitOnly {
    fn is_unlocked(&self, unit_index: usize, _progress: Option<&StudentSyllabusProgress>) -> bool {
        unit_index == 0
    }
}

impl<F> UnlockPolicy for F
where
    F: Fn(usize, Option<&StudentSyllabusProgress>) -> bool,
{
    fn is_unlocked(&self, unit_index: usize, progress: Option<&StudentSyllabusProgress>) -> bool {
        self(unit_index, progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_unit_only() {
        let policy = FirstUnitOnly;
        assert!(policy.is_unlocked(0, None));
        assert!(!policy.is_unlocked(1, None));
        assert!(!policy.is_unlocked(7, None));
    }

    #[test]
    fn test_first_unit_only_ignores_progress() {
        let mut progress = StudentSyllabusProgress::new("10".to_string());
        progress.mark_completed("Mathematics", "Real Numbers");
        assert!(!FirstUnitOnly.is_unlocked(1, Some(&progress)));
    }

    #[test]
    fn test_closure_policy() {
        let first_two = |index: usize, _: Option<&StudentSyllabusProgress>| index < 2;
        assert!(first_two.is_unlocked(1, None));
        assert!(!first_two.is_unlocked(2, None));
    }
}
