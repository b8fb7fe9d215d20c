//! Table maintenance tests.
//!
//! Dealing, replacing and removing cards, returning them to the deck and
//! starting over, along with the events each operation records.

use set_engine::{
    CardId, Feature, GameEvent, GameSettings, SelectionStatus, SetGame, Theme, Zone,
    MAX_PENDING_EVENTS,
};

/// A classic game with `table` cards dealt.
fn game_with_table(table: usize, seed: u64) -> SetGame {
    SetGame::with_seed(GameSettings::classic().with_initial_table_count(table), seed)
}

fn ids(cards: &[&set_engine::Card]) -> Vec<CardId> {
    cards.iter().map(|c| c.id).collect()
}

/// Select a set from the table, leaving it matched. Any 21 classic cards
/// hold a set.
fn match_a_set(game: &mut SetGame) -> Vec<CardId> {
    let set = game.find_available_set().unwrap();
    for &id in &set {
        game.select(id);
    }
    assert_eq!(game.matched_cards().len(), set.len());
    set
}

/// Three table cards that are not a set.
fn non_set(game: &SetGame) -> Vec<CardId> {
    let table = ids(&game.table_cards());
    for a in 0..table.len() {
        for b in a + 1..table.len() {
            for c in b + 1..table.len() {
                let group = vec![table[a], table[b], table[c]];
                if !game.is_valid_set(&group) {
                    return group;
                }
            }
        }
    }
    panic!("every triple on the table is a set");
}

/// Test that adding cards deals `cards_per_deal` from the front of the deck.
#[test]
fn test_add_cards() {
    let mut game = game_with_table(12, 1);
    let next = ids(&game.deck_cards()[..3]);
    game.drain_events();

    game.add_cards();

    let table = ids(&game.table_cards());
    assert_eq!(table.len(), 15);
    assert_eq!(&table[12..], &next[..]);
    assert_eq!(game.deck_cards().len(), 66);
    assert_eq!(game.drain_events(), vec![GameEvent::CardsDealt(next)]);
}

/// Test that the deal size follows the settings.
#[test]
fn test_add_cards_custom_deal_size() {
    let settings = GameSettings::classic().with_cards_per_deal(5).unwrap();
    let mut game = SetGame::with_seed(settings, 1);

    game.add_cards();
    assert_eq!(game.table_cards().len(), 17);
    assert_eq!(game.deck_cards().len(), 64);
}

/// Test that no cards are dealt while a matched group is pending.
#[test]
fn test_add_cards_waits_for_matched_group() {
    let mut game = game_with_table(21, 2);
    match_a_set(&mut game);
    game.drain_events();

    game.add_cards();

    assert_eq!(game.table_cards().len(), 21);
    assert_eq!(game.deck_cards().len(), 60);
    assert!(game.drain_events().is_empty());
}

/// Test that a pending mismatch does not block dealing.
#[test]
fn test_add_cards_with_mismatched_group() {
    let mut game = game_with_table(12, 3);
    for id in non_set(&game) {
        game.select(id);
    }
    assert_eq!(game.mismatched_cards().len(), 3);

    game.add_cards();
    assert_eq!(game.table_cards().len(), 15);
    assert_eq!(game.mismatched_cards().len(), 3);
}

/// Test dealing from an empty deck.
#[test]
fn test_add_cards_from_empty_deck() {
    let mut game = game_with_table(81, 4);
    game.drain_events();

    game.add_cards();

    assert_eq!(game.table_cards().len(), 81);
    assert!(game.drain_events().is_empty());
    assert!(!game.ended());
}

/// Test dealing when the deck holds fewer cards than a full deal.
#[test]
fn test_add_cards_partial_deal() {
    let mut game = game_with_table(80, 4);

    game.add_cards();

    assert_eq!(game.table_cards().len(), 81);
    assert!(game.deck_cards().is_empty());
}

/// Test that replacements take the table slots of the cards they replace.
#[test]
fn test_replace_matched_cards_in_place() {
    let mut game = game_with_table(21, 5);
    let set = match_a_set(&mut game);
    let before = ids(&game.table_cards());
    let slots: Vec<usize> = before
        .iter()
        .enumerate()
        .filter(|(_, id)| set.contains(id))
        .map(|(i, _)| i)
        .collect();
    let matched_in_table_order: Vec<CardId> = slots.iter().map(|&i| before[i]).collect();
    let next = ids(&game.deck_cards()[..3]);
    game.drain_events();

    game.replace_matched_cards();

    let after = ids(&game.table_cards());
    assert_eq!(after.len(), 21);
    for (k, &slot) in slots.iter().enumerate() {
        assert_eq!(after[slot], next[k]);
    }
    for (i, id) in before.iter().enumerate() {
        if !slots.contains(&i) {
            assert_eq!(after[i], *id);
        }
    }
    assert_eq!(ids(&game.removed_cards()), matched_in_table_order);
    assert_eq!(game.deck_cards().len(), 57);

    let pairs: Vec<(CardId, CardId)> = matched_in_table_order
        .iter()
        .copied()
        .zip(next.iter().copied())
        .collect();
    assert_eq!(game.drain_events(), vec![GameEvent::CardsReplaced(pairs)]);
}

/// Test replacing when the deck runs out part-way.
#[test]
fn test_replace_with_short_deck() {
    let mut game = game_with_table(79, 6);
    assert_eq!(game.deck_cards().len(), 2);
    match_a_set(&mut game);
    let matched = ids(&game.matched_cards());
    let next = ids(&game.deck_cards());
    game.drain_events();

    game.replace_matched_cards();

    assert!(game.deck_cards().is_empty());
    assert_eq!(game.table_cards().len(), 78);
    assert_eq!(game.removed_cards().len(), 3);
    assert!(!game.ended());

    let events = game.drain_events();
    assert_eq!(
        events,
        vec![
            GameEvent::CardsReplaced(vec![(matched[0], next[0]), (matched[1], next[1])]),
            GameEvent::CardsRemoved(vec![matched[2]]),
        ]
    );
}

/// Test replacing with an empty deck: the table just shrinks.
#[test]
fn test_replace_with_empty_deck() {
    let mut game = game_with_table(81, 7);
    let set = match_a_set(&mut game);

    game.replace_matched_cards();

    assert_eq!(game.table_cards().len(), 78);
    for id in set {
        assert_eq!(game.card(id).unwrap().zone, Zone::Removed);
    }
}

/// Test that replacing with nothing matched changes nothing.
#[test]
fn test_replace_without_matched_cards() {
    let mut game = game_with_table(12, 8);
    let table = ids(&game.table_cards());
    game.drain_events();

    game.replace_matched_cards();

    assert_eq!(ids(&game.table_cards()), table);
    assert!(game.drain_events().is_empty());
}

/// Test removing matched cards without replacement.
#[test]
fn test_remove_matched_cards() {
    let mut game = game_with_table(21, 9);
    match_a_set(&mut game);
    let matched = ids(&game.matched_cards());
    game.drain_events();

    game.remove_matched_cards();

    assert_eq!(game.table_cards().len(), 18);
    assert_eq!(game.deck_cards().len(), 60);
    assert_eq!(ids(&game.removed_cards()), matched);
    for id in &matched {
        let card = game.card(*id).unwrap();
        assert_eq!(card.zone, Zone::Removed);
        assert_eq!(card.selection, SelectionStatus::NotSelected);
    }
    assert_eq!(game.drain_events(), vec![GameEvent::CardsRemoved(matched)]);
}

/// Test that the removed pile keeps removal order across turns.
#[test]
fn test_removed_pile_order() {
    let mut game = game_with_table(81, 10);
    match_a_set(&mut game);
    let first = ids(&game.matched_cards());
    game.remove_matched_cards();

    match_a_set(&mut game);
    let second = ids(&game.matched_cards());
    game.remove_matched_cards();

    let expected: Vec<CardId> = first.into_iter().chain(second).collect();
    assert_eq!(ids(&game.removed_cards()), expected);
}

/// Test that returning all cards resets every card to the deck.
#[test]
fn test_return_all_cards_to_deck() {
    let mut game = game_with_table(21, 11);
    match_a_set(&mut game);
    game.remove_matched_cards();
    let first = game.table_cards()[0].id;
    game.select(first);
    game.drain_events();

    game.return_all_cards_to_deck();

    assert!(game.table_cards().is_empty());
    assert!(game.removed_cards().is_empty());
    assert_eq!(game.deck_cards().len(), 81);
    for card in game.cards() {
        assert_eq!(card.zone, Zone::Deck);
        assert_eq!(card.selection, SelectionStatus::NotSelected);
    }
    assert_eq!(ids(&game.deck_cards()), game.cards().iter().map(|c| c.id).collect::<Vec<_>>());
    assert_eq!(game.drain_events(), vec![GameEvent::CardsReturned]);
}

/// Test that dealing after a return lays out a fresh table.
#[test]
fn test_deal_cards_after_return() {
    let mut game = game_with_table(12, 12);
    game.return_all_cards_to_deck();

    game.deal_cards();

    assert_eq!(game.table_cards().len(), 12);
    assert_eq!(game.deck_cards().len(), 69);
    assert!(game.removed_cards().is_empty());
}

/// Test that `deal_cards` is reproducible for a given seed.
#[test]
fn test_deal_cards_is_seeded() {
    let table = |seed| {
        let mut game = game_with_table(12, seed);
        game.return_all_cards_to_deck();
        game.deal_cards();
        ids(&game.table_cards())
    };

    assert_eq!(table(13), table(13));
}

/// Test that a new game restarts a finished one.
#[test]
fn test_new_game_after_end() {
    let theme = Theme::new(vec![
        Feature::new("color", ["red"]),
        Feature::new("shape", ["oval"]),
        Feature::new("shading", ["solid"]),
    ])
    .unwrap();
    let mut game = SetGame::with_seed(GameSettings::new(theme).with_initial_table_count(3), 0);
    let set = game.find_available_set().unwrap();
    for id in set {
        game.select(id);
    }
    assert!(game.ended());
    game.drain_events();

    game.new_game();

    assert!(!game.ended());
    assert_eq!(game.table_cards().len(), 3);
    assert!(game.removed_cards().is_empty());

    let events = game.drain_events();
    assert_eq!(events[0], GameEvent::CardsReturned);
    assert!(matches!(&events[1], GameEvent::CardsDealt(dealt) if dealt.len() == 3));
}

/// Test that a new game keeps card identities.
#[test]
fn test_new_game_keeps_cards() {
    let mut game = game_with_table(12, 14);
    let before: Vec<_> = game.cards().iter().map(|c| (c.id, c.figure_count)).collect();

    game.new_game();

    let after: Vec<_> = game.cards().iter().map(|c| (c.id, c.figure_count)).collect();
    assert_eq!(before, after);
    assert_eq!(game.table_cards().len(), 12);
    assert_eq!(game.deck_cards().len(), 69);
}

/// Test that a long session without draining keeps the event backlog bounded.
#[test]
fn test_undrained_events_stay_bounded() {
    let mut game = game_with_table(12, 15);

    for _ in 0..10_000 {
        let id = game.table_cards()[0].id;
        game.select(id);
        game.deselect(id);
        game.new_game();
    }

    let pending = game.pending_events();
    assert_eq!(pending.len(), MAX_PENDING_EVENTS);
    assert!(matches!(pending.last(), Some(GameEvent::CardsDealt(dealt)) if dealt.len() == 12));
    assert_eq!(pending[pending.len() - 2], GameEvent::CardsReturned);
}
