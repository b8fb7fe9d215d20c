//! Choose-without-replacement search over an index range.
//!
//! Looking for a set on the table means checking `C(n, k)` groups, which
//! grows quickly with the table size. The search here walks combinations
//! recursively in lexicographic order and stops at the first accepted one,
//! without ever building the full list of combinations.

use smallvec::SmallVec;

/// Indices of one combination. Inline for groups of up to 8 cards.
pub type Combination = SmallVec<[usize; 8]>;

/// Find the first `k`-combination of `0..n` accepted by `accept`.
///
/// Combinations are visited in lexicographic order, each exactly once,
/// with indices strictly increasing. Returns `None` when `k > n` or no
/// combination is accepted.
///
/// ```
/// use set_engine::rules::find_combination;
///
/// let values = [4, 9, 1, 7, 3];
/// let found = find_combination(values.len(), 2, |idx| values[idx[0]] + values[idx[1]] == 10);
/// assert_eq!(found.as_deref(), Some(&[1, 2][..]));
/// ```
pub fn find_combination<F>(n: usize, k: usize, mut accept: F) -> Option<Combination>
where
    F: FnMut(&[usize]) -> bool,
{
    if k > n {
        return None;
    }
    let mut chosen = Combination::new();
    if search(n, 0, k, &mut chosen, &mut accept) {
        Some(chosen)
    } else {
        None
    }
}

/// True if some `k`-combination of `0..n` is accepted.
pub fn any_combination<F>(n: usize, k: usize, accept: F) -> bool
where
    F: FnMut(&[usize]) -> bool,
{
    find_combination(n, k, accept).is_some()
}

fn search<F>(n: usize, start: usize, k: usize, chosen: &mut Combination, accept: &mut F) -> bool
where
    F: FnMut(&[usize]) -> bool,
{
    if chosen.len() == k {
        return accept(chosen);
    }

    // Leave room for the picks still to come
    let remaining = k - chosen.len();
    for i in start..=(n - remaining) {
        chosen.push(i);
        if search(n, i + 1, k, chosen, accept) {
            return true;
        }
        chosen.pop();
    }
    false
}
