//! Zone manager for card locations and movement.
//!
//! The `ZoneManager` tracks which zone every card is in and the order of
//! cards inside each zone:
//! - Deck: dealing order, index 0 is the next card dealt
//! - Table: the order cards were laid out, replacements take the slot of
//!   the card they replace
//! - Removed: discard pile, in removal order

use rustc_hash::FxHashMap;

use crate::core::entity::CardId;
use crate::core::rng::GameRng;

use serde::{Deserialize, Serialize};

/// The physical location of a card. Exactly one holds at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Undealt.
    Deck,
    /// Visible and selectable.
    Table,
    /// Discarded after a match.
    Removed,
}

impl Zone {
    /// Every zone.
    pub const ALL: [Zone; 3] = [Zone::Deck, Zone::Table, Zone::Removed];
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Zone::Deck => "deck",
            Zone::Table => "table",
            Zone::Removed => "removed",
        };
        f.write_str(name)
    }
}

/// Position for inserting a card into a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZonePosition {
    /// Append after the last card.
    Back,
    /// Insert at a specific index (clamped to the zone length).
    Index(usize),
}

/// Manages card locations across zones.
///
/// ## Usage
///
/// ```
/// use set_engine::core::CardId;
/// use set_engine::zones::{Zone, ZoneManager, ZonePosition};
///
/// let mut manager = ZoneManager::new();
/// manager.add_to_zone(CardId(10), Zone::Deck, ZonePosition::Back);
/// manager.add_to_zone(CardId(11), Zone::Deck, ZonePosition::Back);
///
/// manager.move_to_zone(CardId(10), Zone::Table, ZonePosition::Back);
///
/// assert_eq!(manager.cards_in_zone(Zone::Deck), &[CardId(11)]);
/// assert_eq!(manager.get_zone(CardId(10)), Some(Zone::Table));
/// ```
#[derive(Clone, Debug)]
pub struct ZoneManager {
    /// Card locations: card_id -> zone
    locations: FxHashMap<CardId, Zone>,

    /// Ordered card list per zone.
    zone_order: FxHashMap<Zone, Vec<CardId>>,
}

impl Default for ZoneManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoneManager {
    /// Create a manager with every zone empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            locations: FxHashMap::default(),
            zone_order: Zone::ALL.iter().map(|&z| (z, Vec::new())).collect(),
        }
    }

    /// Add a card to a zone.
    ///
    /// Panics if the card is already tracked.
    pub fn add_to_zone(&mut self, card: CardId, zone: Zone, position: ZonePosition) {
        if self.contains(card) {
            panic!("Card {:?} already exists in zone manager", card);
        }

        self.locations.insert(card, zone);
        self.insert_ordered(card, zone, position);
    }

    /// Move a card from its zone to another one.
    ///
    /// Returns the old zone, or `None` if the card isn't tracked.
    /// Moving a card to the zone it is already in leaves its position alone.
    pub fn move_to_zone(
        &mut self,
        card: CardId,
        new_zone: Zone,
        position: ZonePosition,
    ) -> Option<Zone> {
        let old_zone = self.locations.get(&card).copied()?;

        if old_zone == new_zone {
            return Some(old_zone);
        }

        if let Some(order) = self.zone_order.get_mut(&old_zone) {
            order.retain(|&c| c != card);
        }

        self.locations.insert(card, new_zone);
        self.insert_ordered(card, new_zone, position);

        Some(old_zone)
    }

    fn insert_ordered(&mut self, card: CardId, zone: Zone, position: ZonePosition) {
        let order = self.zone_order.entry(zone).or_default();
        match position {
            ZonePosition::Back => order.push(card),
            ZonePosition::Index(i) => {
                let idx = i.min(order.len());
                order.insert(idx, card);
            }
        }
    }

    /// Get the zone a card is in.
    #[must_use]
    pub fn get_zone(&self, card: CardId) -> Option<Zone> {
        self.locations.get(&card).copied()
    }

    /// Cards in a zone, in zone order.
    #[must_use]
    pub fn cards_in_zone(&self, zone: Zone) -> &[CardId] {
        self.zone_order.get(&zone).map_or(&[], |v| v.as_slice())
    }

    /// The first `count` cards of a zone (fewer if the zone is smaller).
    #[must_use]
    pub fn front(&self, zone: Zone, count: usize) -> &[CardId] {
        let cards = self.cards_in_zone(zone);
        &cards[..count.min(cards.len())]
    }

    /// Index of a card within its zone.
    #[must_use]
    pub fn position_in_zone(&self, card: CardId) -> Option<usize> {
        let zone = self.get_zone(card)?;
        self.cards_in_zone(zone).iter().position(|&c| c == card)
    }

    /// Get the number of cards in a zone.
    #[must_use]
    pub fn zone_size(&self, zone: Zone) -> usize {
        self.cards_in_zone(zone).len()
    }

    /// Shuffle the order of a zone.
    pub fn shuffle_zone(&mut self, zone: Zone, rng: &mut GameRng) {
        if let Some(order) = self.zone_order.get_mut(&zone) {
            rng.shuffle(order);
        }
    }

    /// Put every given card into `zone`, in the given order, emptying all
    /// other zones.
    pub fn reset<I>(&mut self, cards: I, zone: Zone)
    where
        I: IntoIterator<Item = CardId>,
    {
        self.locations.clear();
        for order in self.zone_order.values_mut() {
            order.clear();
        }
        for card in cards {
            self.add_to_zone(card, zone, ZonePosition::Back);
        }
    }

    /// Check if the manager tracks a card.
    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.locations.contains_key(&card)
    }
}
