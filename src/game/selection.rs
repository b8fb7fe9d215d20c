//! Card selection.
//!
//! Each card cycles `NotSelected -> Selected -> Matched | MisMatched ->
//! NotSelected`. A completed group is validated as soon as its last card
//! is picked. The matched or mismatched feedback then stays visible until
//! the next tap, which clears it before registering the new pick. There is
//! no timer involved; cleanup always happens on a gesture.

use tracing::debug;

use super::events::GameEvent;
use super::state::SetGame;
use crate::cards::{Card, SelectionStatus};
use crate::core::CardId;

impl SetGame {
    /// Handle a tap on a table card.
    ///
    /// - A pending matched group is replaced from the deck, a pending
    ///   mismatched group is cleared; then the tapped card is selected if it
    ///   is still on the table.
    /// - Otherwise a selected card is deselected and an unselected card is
    ///   selected. Selecting the last card of a group validates the group.
    ///
    /// Unknown ids and cards that are not on the table are ignored.
    pub fn select(&mut self, id: CardId) {
        let Some(card) = self.card(id) else {
            debug!(card = %id, "ignoring unknown card");
            return;
        };
        if !card.is_on_table() {
            debug!(card = %id, zone = %card.zone, "ignoring card off the table");
            return;
        }
        let already_selected = card.is_selected();

        if self.has_pending_group() {
            self.resolve_pending_group();
            if self.card(id).is_some_and(Card::is_on_table) {
                self.mark_selected(id);
            }
            return;
        }

        if already_selected {
            self.deselect(id);
            return;
        }

        self.mark_selected(id);
        if self.is_set_complete() {
            self.evaluate_selection();
        }
    }

    /// Deselect a selected card.
    ///
    /// No-op for unknown ids and for cards that are not in the `Selected`
    /// state (matched and mismatched groups are only cleared by `select`).
    pub fn deselect(&mut self, id: CardId) {
        if !self.card(id).is_some_and(Card::is_selected) {
            return;
        }
        self.set_selection(id, SelectionStatus::NotSelected);
        debug!(card = %id, "card deselected");
        self.events.push(GameEvent::CardDeselected(id));
    }

    /// True while a matched or mismatched group waits for the next tap.
    #[must_use]
    pub fn has_pending_group(&self) -> bool {
        self.table_cards().iter().any(|c| c.selection.is_pending())
    }

    fn mark_selected(&mut self, id: CardId) {
        self.set_selection(id, SelectionStatus::Selected);
        debug!(card = %id, "card selected");
        self.events.push(GameEvent::CardSelected(id));
    }

    fn resolve_pending_group(&mut self) {
        if !self.ids_with(SelectionStatus::Matched).is_empty() {
            self.replace_matched_cards();
        }

        let mismatched = self.ids_with(SelectionStatus::MisMatched);
        if !mismatched.is_empty() {
            for &id in &mismatched {
                self.set_selection(id, SelectionStatus::NotSelected);
            }
            debug!(count = mismatched.len(), "mismatched group cleared");
            self.events.push(GameEvent::MismatchCleared(mismatched));
        }
    }

    /// Validate the complete selected group and mark it.
    ///
    /// A matched group that makes up the whole table is removed straight
    /// away, which ends the game when the deck is empty too.
    fn evaluate_selection(&mut self) {
        let group = self.ids_with(SelectionStatus::Selected);

        if self.is_valid_set(&group) {
            for &id in &group {
                self.set_selection(id, SelectionStatus::Matched);
            }
            debug!(cards = ?group, "set matched");
            let whole_table = group.len() == self.table_cards().len();
            self.events.push(GameEvent::SetMatched(group));

            if whole_table {
                self.remove_matched_cards();
            }
        } else {
            for &id in &group {
                self.set_selection(id, SelectionStatus::MisMatched);
            }
            debug!(cards = ?group, "set mismatched");
            self.events.push(GameEvent::SetMismatched(group));
        }
    }
}
