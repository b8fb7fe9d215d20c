//! The Set game: card collection, zone views and table maintenance.
//!
//! `SetGame` owns every card of a game. Cards are generated once, from the
//! theme, and never deleted: they only move between the deck, the table
//! and the removed pile. All derived views (table cards, selected cards,
//! ...) are computed from the live state on every call.

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use super::events::{EventQueue, GameEvent};
use crate::cards::{Card, Features, SelectionStatus};
use crate::core::{CardId, GameRng, GameSettings, Theme};
use crate::rules;
use crate::zones::{Zone, ZoneManager, ZonePosition};

/// A game of Set.
///
/// ## Usage
///
/// ```
/// use set_engine::core::GameSettings;
/// use set_engine::game::SetGame;
///
/// let mut game = SetGame::with_seed(GameSettings::classic(), 7);
/// assert_eq!(game.cards().len(), 81);
/// assert_eq!(game.table_cards().len(), 12);
///
/// if let Some(set) = game.find_available_set() {
///     for id in &set {
///         game.select(*id);
///     }
///     assert_eq!(game.matched_cards().len(), 3);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct SetGame {
    settings: GameSettings,

    /// Every card of the game, in shuffled generation order.
    cards: Vec<Card>,

    /// Card id -> index into `cards`.
    index: FxHashMap<CardId, usize>,

    /// Zone membership and order. Mirrors `Card::zone`.
    zones: ZoneManager,

    ended: bool,

    rng: GameRng,

    pub(super) events: EventQueue,
}

impl SetGame {
    /// Create a game shuffled with OS entropy.
    #[must_use]
    pub fn new(settings: GameSettings) -> Self {
        Self::with_rng(settings, GameRng::from_entropy())
    }

    /// Create a game whose shuffles are determined by `seed`.
    #[must_use]
    pub fn with_seed(settings: GameSettings, seed: u64) -> Self {
        Self::with_rng(settings, GameRng::new(seed))
    }

    fn with_rng(settings: GameSettings, mut rng: GameRng) -> Self {
        let mut cards = generate_deck(settings.theme());
        rng.shuffle(&mut cards);

        let index = cards.iter().enumerate().map(|(i, c)| (c.id, i)).collect();
        let mut zones = ZoneManager::new();
        zones.reset(cards.iter().map(|c| c.id), Zone::Deck);

        let mut game = Self {
            settings,
            cards,
            index,
            zones,
            ended: false,
            rng,
            events: EventQueue::new(),
        };
        debug!(
            cards = game.cards.len(),
            set_size = game.set_size(),
            seed = game.rng.seed(),
            "deck generated"
        );

        game.deal_from_deck(game.settings.initial_table_count());
        game
    }

    // === Read Access ===

    /// The settings this game was created with.
    #[must_use]
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Cards per set.
    #[must_use]
    pub fn set_size(&self) -> usize {
        self.settings.set_size()
    }

    /// Seed of the shuffling RNG, for replaying a game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// True once the last set has been taken and no cards remain to deal.
    #[must_use]
    pub fn ended(&self) -> bool {
        self.ended
    }

    /// Every card, whatever its zone.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.index.get(&id).map(|&i| &self.cards[i])
    }

    /// Cards in a zone, in zone order.
    #[must_use]
    pub fn cards_in(&self, zone: Zone) -> Vec<&Card> {
        self.zones
            .cards_in_zone(zone)
            .iter()
            .filter_map(|&id| self.card(id))
            .collect()
    }

    /// Undealt cards, next card to deal first.
    #[must_use]
    pub fn deck_cards(&self) -> Vec<&Card> {
        self.cards_in(Zone::Deck)
    }

    /// Cards on the table, in layout order.
    #[must_use]
    pub fn table_cards(&self) -> Vec<&Card> {
        self.cards_in(Zone::Table)
    }

    /// Removed cards, in the order they were removed.
    #[must_use]
    pub fn removed_cards(&self) -> Vec<&Card> {
        self.cards_in(Zone::Removed)
    }

    /// Selected cards, in table order.
    #[must_use]
    pub fn selected_cards(&self) -> Vec<&Card> {
        self.cards_with(SelectionStatus::Selected)
    }

    /// Matched cards still waiting to be cleared, in table order.
    #[must_use]
    pub fn matched_cards(&self) -> Vec<&Card> {
        self.cards_with(SelectionStatus::Matched)
    }

    /// Mismatched cards still waiting to be cleared, in table order.
    #[must_use]
    pub fn mismatched_cards(&self) -> Vec<&Card> {
        self.cards_with(SelectionStatus::MisMatched)
    }

    /// True when exactly `set_size` cards are selected.
    #[must_use]
    pub fn is_set_complete(&self) -> bool {
        self.selected_cards().len() == self.set_size()
    }

    // Only table cards ever carry a selection other than `NotSelected`.
    fn cards_with(&self, status: SelectionStatus) -> Vec<&Card> {
        self.table_cards()
            .into_iter()
            .filter(|c| c.selection == status)
            .collect()
    }

    pub(super) fn ids_with(&self, status: SelectionStatus) -> Vec<CardId> {
        self.cards_with(status).into_iter().map(|c| c.id).collect()
    }

    // === Set Rules ===

    /// Check whether the given cards form a set.
    ///
    /// `false` for the wrong number of cards, unknown ids or a repeated id.
    #[must_use]
    pub fn is_valid_set(&self, ids: &[CardId]) -> bool {
        if ids.len() != self.set_size() || !rules::all_distinct(ids) {
            return false;
        }
        let cards: Option<Vec<&Card>> = ids.iter().map(|&id| self.card(id)).collect();
        match cards {
            Some(cards) => rules::is_set(&cards, self.set_size()),
            None => false,
        }
    }

    /// True if at least one set can be formed from the table cards.
    #[must_use]
    pub fn has_available_set(&self) -> bool {
        let table = self.table_cards();
        let set_size = self.set_size();
        let mut group: Vec<&Card> = Vec::with_capacity(set_size);

        rules::any_combination(table.len(), set_size, |indices| {
            group.clear();
            group.extend(indices.iter().map(|&i| table[i]));
            rules::is_set(&group, set_size)
        })
    }

    /// The first set found among the table cards, if any.
    ///
    /// Groups are tried in table order and the search stops at the first
    /// valid one.
    #[must_use]
    pub fn find_available_set(&self) -> Option<Vec<CardId>> {
        let table = self.table_cards();
        let set_size = self.set_size();
        let mut group: Vec<&Card> = Vec::with_capacity(set_size);

        let found = rules::find_combination(table.len(), set_size, |indices| {
            group.clear();
            group.extend(indices.iter().map(|&i| table[i]));
            rules::is_set(&group, set_size)
        })?;

        Some(found.iter().map(|&i| table[i].id).collect())
    }

    // === Events ===

    /// Events recorded since the last drain.
    #[must_use]
    pub fn pending_events(&self) -> &[GameEvent] {
        self.events.pending()
    }

    /// Take the recorded events, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    // === Table Maintenance ===

    /// Move every matched card to the removed pile.
    ///
    /// No-op if there are no matched cards.
    pub fn remove_matched_cards(&mut self) {
        let matched = self.ids_with(SelectionStatus::Matched);
        if matched.is_empty() {
            return;
        }

        for &id in &matched {
            self.move_card(id, Zone::Removed, ZonePosition::Back);
        }
        debug!(count = matched.len(), "matched cards removed");
        self.events.push(GameEvent::CardsRemoved(matched));
        self.check_game_end();
    }

    /// Deal `cards_per_deal` more cards from the deck to the table.
    ///
    /// Does nothing while a matched group is still waiting to be removed.
    /// Deals fewer cards, possibly none, when the deck runs low.
    pub fn add_cards(&mut self) {
        if !self.ids_with(SelectionStatus::Matched).is_empty() {
            debug!("matched group pending, not dealing");
            return;
        }
        self.deal_from_deck(self.settings.cards_per_deal());
    }

    /// Swap each matched card for the next deck card, in place.
    ///
    /// Matched cards are paired with deck cards in table order; each new
    /// card takes the table slot of the card it replaces. Matched cards
    /// left without a partner because the deck ran out are just removed.
    pub fn replace_matched_cards(&mut self) {
        let matched = self.ids_with(SelectionStatus::Matched);
        if matched.is_empty() {
            return;
        }

        let fresh = self.zones.front(Zone::Deck, matched.len()).to_vec();
        let mut replaced = Vec::with_capacity(fresh.len());
        let mut removed = Vec::new();

        for (i, &old) in matched.iter().enumerate() {
            let slot = self.zones.position_in_zone(old);
            self.move_card(old, Zone::Removed, ZonePosition::Back);

            match fresh.get(i) {
                Some(&new) => {
                    let position = slot.map_or(ZonePosition::Back, ZonePosition::Index);
                    self.move_card(new, Zone::Table, position);
                    replaced.push((old, new));
                }
                None => removed.push(old),
            }
        }

        debug!(
            replaced = replaced.len(),
            removed = removed.len(),
            "matched cards replaced"
        );
        if !replaced.is_empty() {
            self.events.push(GameEvent::CardsReplaced(replaced));
        }
        if !removed.is_empty() {
            self.events.push(GameEvent::CardsRemoved(removed));
        }
        self.check_game_end();
    }

    /// Put every card back in the deck, unselected.
    ///
    /// Card ids and features are kept; the deck order is the collection
    /// order. Clears the `ended` flag.
    pub fn return_all_cards_to_deck(&mut self) {
        self.zones.reset(self.cards.iter().map(|c| c.id), Zone::Deck);
        for card in &mut self.cards {
            card.set_zone(Zone::Deck);
            card.set_selection(SelectionStatus::NotSelected);
        }
        self.ended = false;
        debug!("all cards returned to deck");
        self.events.push(GameEvent::CardsReturned);
    }

    /// Shuffle the deck and deal the initial table from it.
    ///
    /// Clears the `ended` flag. Cards already on the table stay there.
    pub fn deal_cards(&mut self) {
        self.ended = false;
        self.zones.shuffle_zone(Zone::Deck, &mut self.rng);
        self.deal_from_deck(self.settings.initial_table_count());
    }

    /// Start over with the same cards: return everything to the deck,
    /// shuffle it and deal a fresh table.
    pub fn new_game(&mut self) {
        self.return_all_cards_to_deck();
        self.deal_cards();
    }

    // === Internal Helpers ===

    fn deal_from_deck(&mut self, count: usize) {
        let dealt = self.zones.front(Zone::Deck, count).to_vec();
        if dealt.is_empty() {
            debug!("deck empty, nothing dealt");
            return;
        }

        for &id in &dealt {
            self.move_card(id, Zone::Table, ZonePosition::Back);
        }
        debug!(count = dealt.len(), "cards dealt");
        self.events.push(GameEvent::CardsDealt(dealt));
    }

    /// Move a card, keeping `Card::zone` and the zone manager in step.
    fn move_card(&mut self, id: CardId, zone: Zone, position: ZonePosition) {
        let Some(&i) = self.index.get(&id) else {
            return;
        };
        self.zones.move_to_zone(id, zone, position);
        self.cards[i].set_zone(zone);
        trace!(card = %id, %zone, "card moved");
    }

    pub(super) fn set_selection(&mut self, id: CardId, status: SelectionStatus) {
        if let Some(&i) = self.index.get(&id) {
            self.cards[i].set_selection(status);
        }
    }

    fn check_game_end(&mut self) {
        let cards_left = self.zones.zone_size(Zone::Table) + self.zones.zone_size(Zone::Deck);
        if self.ended || cards_left > 0 {
            return;
        }
        self.ended = true;
        debug!("game ended");
        self.events.push(GameEvent::GameEnded);
    }
}

/// Build one card per (figure count, feature combination).
///
/// Feature combinations are the Cartesian product of the theme's value
/// lists, first feature outermost. Ids are handed out in generation order.
fn generate_deck(theme: &Theme) -> Vec<Card> {
    let empty: Vec<Vec<&str>> = vec![Vec::new()];
    let combinations = theme
        .features()
        .iter()
        .fold(empty, |partials, feature| {
            partials
                .iter()
                .flat_map(|partial| {
                    feature.values.iter().map(move |value| {
                        let mut next = partial.clone();
                        next.push(value.as_str());
                        next
                    })
                })
                .collect()
        });

    let names: Vec<&str> = theme.features().iter().map(|f| f.name.as_str()).collect();
    let mut cards = Vec::with_capacity(theme.deck_size());
    let mut next_id = CardId::first();

    // Set size is capped at u8::MAX when the theme is validated
    for figure_count in 1..=theme.set_size() as u8 {
        for combination in &combinations {
            let features: Features = names
                .iter()
                .copied()
                .zip(combination.iter().copied())
                .collect();
            cards.push(Card::new(next_id, figure_count, features));
            next_id = next_id.next();
        }
    }
    cards
}
