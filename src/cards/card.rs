//! Cards - identity, printed features and runtime state.
//!
//! A `Card` combines the immutable data printed on it (`figure_count`,
//! `features`) with the two pieces of state that change during play: the
//! zone it sits in and its selection status.
//!
//! The engine only ever hands out shared references, so collaborators can
//! read every field but cannot move or mark cards behind the engine's back.

use serde::{Deserialize, Serialize};

use super::features::Features;
use crate::core::entity::CardId;
use crate::zones::Zone;

/// Matching feedback state of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionStatus {
    #[default]
    NotSelected,
    /// Picked by the player, group not complete yet.
    Selected,
    /// Part of a completed group that formed a set.
    Matched,
    /// Part of a completed group that did not form a set.
    MisMatched,
}

impl SelectionStatus {
    /// Matched or mismatched: feedback waiting for the next gesture.
    #[must_use]
    pub fn is_pending(self) -> bool {
        matches!(self, SelectionStatus::Matched | SelectionStatus::MisMatched)
    }
}

/// A card in a game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique, stable id assigned when the deck is generated.
    pub id: CardId,

    /// How many copies of the symbol the card shows, `1..=set_size`.
    pub figure_count: u8,

    /// One value per theme feature, in theme order.
    pub features: Features,

    /// Where the card currently is.
    pub zone: Zone,

    /// Matching feedback state.
    pub selection: SelectionStatus,
}

impl Card {
    /// Create a card sitting in the deck, not selected.
    #[must_use]
    pub fn new(id: CardId, figure_count: u8, features: Features) -> Self {
        Self {
            id,
            figure_count,
            features,
            zone: Zone::Deck,
            selection: SelectionStatus::NotSelected,
        }
    }

    /// Value of a feature by name.
    #[must_use]
    pub fn feature(&self, name: &str) -> Option<&str> {
        self.features.get(name)
    }

    /// Is the card on the table?
    #[must_use]
    pub fn is_on_table(&self) -> bool {
        self.zone == Zone::Table
    }

    /// Is the card selected (but not yet matched or mismatched)?
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selection == SelectionStatus::Selected
    }

    /// Move the card to `zone`.
    ///
    /// Removing a card always clears its selection.
    pub(crate) fn set_zone(&mut self, zone: Zone) {
        self.zone = zone;
        if zone == Zone::Removed {
            self.selection = SelectionStatus::NotSelected;
        }
    }

    /// Change the selection status.
    pub(crate) fn set_selection(&mut self, selection: SelectionStatus) {
        self.selection = selection;
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} x{}", self.id, self.figure_count)?;
        for (_, value) in self.features.iter() {
            write!(f, " {}", value)?;
        }
        write!(f, "]")
    }
}
