//! The set rule.
//!
//! A group of cards is a set when, for every dimension, the values the
//! cards show are either all the same or all different. The dimensions are
//! the figure count plus every feature of the theme.
//!
//! The rule is written for any group size, so it covers the classic
//! three-card game as well as themes with more features.

use std::hash::Hash;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::cards::Card;

/// True if every value equals the first. Empty input is not "all equal".
#[must_use]
pub fn all_equal<T: PartialEq>(values: &[T]) -> bool {
    match values.split_first() {
        Some((first, rest)) => rest.iter().all(|v| v == first),
        None => false,
    }
}

/// True if no two values are equal.
#[must_use]
pub fn all_distinct<T: Eq + Hash>(values: &[T]) -> bool {
    let mut seen = FxHashSet::default();
    values.iter().all(|v| seen.insert(v))
}

/// True if the values are all equal or all distinct.
#[must_use]
pub fn dimension_ok<T: Eq + Hash>(values: &[T]) -> bool {
    all_equal(values) || all_distinct(values)
}

/// Check whether `cards` form a set of size `set_size`.
///
/// Returns `false` for a group of the wrong size. Feature names are taken
/// from the first card; a card missing a feature counts as showing "no
/// value" for it. The result does not depend on the order of `cards`.
#[must_use]
pub fn is_set(cards: &[&Card], set_size: usize) -> bool {
    if cards.len() != set_size {
        return false;
    }
    let Some(first) = cards.first() else {
        return false;
    };

    let figures: SmallVec<[u8; 8]> = cards.iter().map(|c| c.figure_count).collect();
    if !dimension_ok(&figures) {
        return false;
    }

    first.features.names().all(|name| {
        let values: SmallVec<[Option<&str>; 8]> = cards.iter().map(|c| c.feature(name)).collect();
        dimension_ok(&values)
    })
}
