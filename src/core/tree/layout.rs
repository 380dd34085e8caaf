//! Trunk and branch layout
//!
//! One branch per month, in sequence order, alternating sides of the trunk
//! by index parity.

use super::card::UnitCard;
use super::unlock::UnlockPolicy;
use crate::core::models::{StudentSyllabusProgress, SyllabusStructure};

/// Which side of the trunk a card sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Card to the left of the trunk, anchored against it (even indices)
    Left,
    /// Card to the right of the trunk (odd indices)
    Right,
}

impl Side {
    /// Side for a display index
    #[must_use]
    pub const fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Left
        } else {
            Self::Right
        }
    }

    /// Lowercase name used in CSS classes
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Style of the marker drawn on the trunk for a branch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStyle {
    /// Filled, glowing marker for unlocked units
    Glow,
    /// Muted marker for locked units
    Muted,
}

impl NodeStyle {
    /// Lowercase name used in CSS classes
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Glow => "glow",
            Self::Muted => "muted",
        }
    }

    /// Terminal glyph for the marker
    #[must_use]
    pub const fn glyph(&self) -> char {
        match self {
            Self::Glow => '●',
            Self::Muted => '○',
        }
    }
}

/// One month's branch: connector, trunk marker and card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch<'a> {
    /// Display index of the month
    pub index: usize,
    /// Side of the trunk the card sits on
    pub side: Side,
    /// Trunk marker style
    pub node: NodeStyle,
    /// Card render model
    pub card: UnitCard<'a>,
}

/// The full tree: a trunk with branches in sequence order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLayout<'a> {
    /// Branches, one per month
    pub branches: Vec<Branch<'a>>,
}

impl<'a> TreeLayout<'a> {
    /// Lay out a structure
    ///
    /// # Arguments
    /// * `structure` - Season plan to draw
    /// * `expanded_month` - Number of the expanded month, if any
    /// * `policy` - Unlock policy consulted per index
    /// * `progress` - Optional progress record passed to the policy
    #[must_use]
    pub fn build(
        structure: &'a SyllabusStructure,
        expanded_month: Option<u32>,
        policy: &dyn UnlockPolicy,
        progress: Option<&StudentSyllabusProgress>,
    ) -> Self {
        let branches = structure
            .months
            .iter()
            .enumerate()
            .map(|(index, month)| {
                let is_unlocked = policy.is_unlocked(index, progress);
                let is_expanded = expanded_month == Some(month.month_number);
                Branch {
                    index,
                    side: Side::for_index(index),
                    node: if is_unlocked {
                        NodeStyle::Glow
                    } else {
                        NodeStyle::Muted
                    },
                    card: UnitCard::build(month, is_unlocked, is_expanded),
                }
            })
            .collect();

        Self { branches }
    }

    /// Branch for a month number
    #[must_use]
    pub fn branch(&self, month_number: u32) -> Option<&Branch<'a>> {
        self.branches
            .iter()
            .find(|b| b.card.month_number == month_number)
    }

    /// Number of unlocked branches
    #[must_use]
    pub fn unlocked_count(&self) -> usize {
        self.branches.iter().filter(|b| b.card.is_unlocked).count()
    }
}
