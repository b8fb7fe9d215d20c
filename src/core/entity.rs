//! Card identification.
//!
//! Every card generated for a game gets a `CardId` when the deck is built.
//! The id never changes and is never reused, even after the card has been
//! removed from play, so collaborators can keep referring to discarded cards.
//!
//! ## Usage
//!
//! ```
//! use set_engine::core::CardId;
//!
//! let first = CardId::first();
//! assert_eq!(first.next(), CardId(1));
//! assert_eq!(format!("{}", first), "Card(0)");
//! ```

use serde::{Deserialize, Serialize};

/// Stable identifier for a card.
///
/// Intents on the engine always take a `CardId`, never a position, so ids
/// stay valid across shuffles and reorderings done by collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// The first id handed out when a deck is generated.
    #[must_use]
    pub const fn first() -> Self {
        Self(0)
    }

    /// The id following this one in allocation order.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}
