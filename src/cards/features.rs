//! Feature values carried by a card.
//!
//! A card has one value per theme feature (its color, its shape, ...).
//! Features are kept as an ordered name -> value mapping in theme order,
//! so themes with any number of features work the same way and iteration
//! order is stable across cards of the same game.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Ordered mapping from feature name to value.
///
/// Most themes have three or four features, which fit inline without
/// allocating the backing list.
///
/// ```
/// use set_engine::cards::Features;
///
/// let features: Features = [("color", "red"), ("shape", "oval")].into_iter().collect();
///
/// assert_eq!(features.get("color"), Some("red"));
/// assert_eq!(features.get("shading"), None);
/// assert_eq!(features.names().collect::<Vec<_>>(), ["color", "shape"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Features(SmallVec<[(String, String); 4]>);

impl Features {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value of a feature.
    ///
    /// Replaces the value in place if the feature is already present,
    /// otherwise appends it.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Value of a feature, if the card has it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Feature names, in theme order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    /// `(name, value)` pairs, in theme order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no feature is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Features {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut features = Features::new();
        for (name, value) in iter {
            features.insert(name, value);
        }
        features
    }
}
