//! Game events.
//!
//! Every state change the engine makes is also recorded as a `GameEvent`.
//! Collaborators that need to react (redraw a card, animate a deal, play a
//! sound) drain the queue after each intent instead of observing the game
//! object directly.

use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// Something that happened during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A card became selected.
    CardSelected(CardId),
    /// A selected card was deselected.
    CardDeselected(CardId),
    /// A completed group formed a set.
    SetMatched(Vec<CardId>),
    /// A completed group did not form a set.
    SetMismatched(Vec<CardId>),
    /// A mismatched group was cleared by the next gesture.
    MismatchCleared(Vec<CardId>),
    /// Cards moved from the deck to the table.
    CardsDealt(Vec<CardId>),
    /// Matched cards moved to the removed pile.
    CardsRemoved(Vec<CardId>),
    /// Matched cards were swapped for deck cards, as `(removed, dealt)`.
    CardsReplaced(Vec<(CardId, CardId)>),
    /// Every card went back to the deck.
    CardsReturned,
    /// The table and the deck are both empty.
    GameEnded,
}

/// Events kept before the oldest ones are dropped.
pub const MAX_PENDING_EVENTS: usize = 1024;

/// Queue of events waiting to be read by collaborators.
///
/// Holds at most `limit` events. Callers that never drain lose the oldest
/// events instead of growing the queue for the life of the game.
#[derive(Clone, Debug)]
pub struct EventQueue {
    pending: Vec<GameEvent>,
    limit: usize,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::with_limit(MAX_PENDING_EVENTS)
    }
}

impl EventQueue {
    /// Create an empty queue holding up to `MAX_PENDING_EVENTS`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty queue holding up to `limit` events (at least one).
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            pending: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Maximum number of events kept.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Record an event, dropping the oldest one if the queue is full.
    pub fn push(&mut self, event: GameEvent) {
        tracing::trace!(?event, "game event");
        if self.pending.len() >= self.limit {
            let dropped = self.pending.remove(0);
            tracing::trace!(?dropped, limit = self.limit, "event queue full");
        }
        self.pending.push(event);
    }

    /// Events recorded since the last drain, oldest first.
    #[must_use]
    pub fn pending(&self) -> &[GameEvent] {
        &self.pending
    }

    /// Take every recorded event, oldest first, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending)
    }
}
