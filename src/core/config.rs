//! Game configuration types.
//!
//! A game is configured at startup by providing:
//! - `Feature`: one feature dimension (color, shape, ...) and its values
//! - `Theme`: the ordered feature list; its length is the set size
//! - `GameSettings`: the theme plus deal sizing
//!
//! Themes are validated once at construction and are read-only afterwards,
//! so the engine can rely on `set_size == features.len()` and on every
//! feature having the same number of values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of cards dealt to the table at the start of a game.
pub const DEFAULT_INITIAL_TABLE_COUNT: usize = 12;

/// Figure counts run up to the set size and are stored as `u8`.
const MAX_FEATURES: usize = u8::MAX as usize;

/// Reasons a theme is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("a theme needs at least 2 features, got {0}")]
    TooFewFeatures(usize),
    #[error("a theme supports at most 255 features, got {0}")]
    TooManyFeatures(usize),
    #[error("feature names must not be empty")]
    EmptyFeatureName,
    #[error("duplicate feature name {0:?}")]
    DuplicateFeature(String),
    #[error("feature {0:?} has no values")]
    NoValues(String),
    #[error("feature {feature:?} lists value {value:?} more than once")]
    DuplicateValue { feature: String, value: String },
    #[error("feature {feature:?} has {found} values, expected {expected}")]
    ValueCountMismatch {
        feature: String,
        expected: usize,
        found: usize,
    },
    #[error("{values} values over {features} features give more than u32::MAX cards")]
    DeckTooLarge { features: usize, values: usize },
}

/// Reasons game settings are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("cards per deal must be at least 1")]
    ZeroCardsPerDeal,
}

/// One feature dimension of a card, e.g. `color` with `red`, `blue`, `green`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Feature name, unique within a theme.
    pub name: String,

    /// Possible values, in enumeration order.
    pub values: Vec<String>,
}

impl Feature {
    /// Create a feature from a name and its possible values.
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of possible values.
    #[must_use]
    pub fn value_count(&self) -> usize {
        self.values.len()
    }
}

/// The feature dimensions cards are generated from.
///
/// ```
/// use set_engine::core::{Feature, Theme};
///
/// let theme = Theme::new(vec![
///     Feature::new("color", ["red", "blue"]),
///     Feature::new("shape", ["oval", "diamond"]),
/// ])
/// .unwrap();
///
/// assert_eq!(theme.set_size(), 2);
/// assert_eq!(theme.deck_size(), 8); // 2^2 combinations * 2 figure counts
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ThemeDef")]
pub struct Theme {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct ThemeDef {
    features: Vec<Feature>,
}

impl TryFrom<ThemeDef> for Theme {
    type Error = ThemeError;

    fn try_from(def: ThemeDef) -> Result<Self, Self::Error> {
        Theme::new(def.features)
    }
}

impl Theme {
    /// Create a validated theme.
    pub fn new(features: Vec<Feature>) -> Result<Self, ThemeError> {
        if features.len() < 2 {
            return Err(ThemeError::TooFewFeatures(features.len()));
        }
        if features.len() > MAX_FEATURES {
            return Err(ThemeError::TooManyFeatures(features.len()));
        }

        let expected = features[0].value_count();
        for (i, feature) in features.iter().enumerate() {
            if feature.name.is_empty() {
                return Err(ThemeError::EmptyFeatureName);
            }
            if features[..i].iter().any(|f| f.name == feature.name) {
                return Err(ThemeError::DuplicateFeature(feature.name.clone()));
            }
            if feature.values.is_empty() {
                return Err(ThemeError::NoValues(feature.name.clone()));
            }
            for (j, value) in feature.values.iter().enumerate() {
                if feature.values[..j].contains(value) {
                    return Err(ThemeError::DuplicateValue {
                        feature: feature.name.clone(),
                        value: value.clone(),
                    });
                }
            }
            if feature.value_count() != expected {
                return Err(ThemeError::ValueCountMismatch {
                    feature: feature.name.clone(),
                    expected,
                    found: feature.value_count(),
                });
            }
        }

        if checked_deck_size(features.len(), expected).is_none() {
            return Err(ThemeError::DeckTooLarge {
                features: features.len(),
                values: expected,
            });
        }

        Ok(Self { features })
    }

    /// The classic theme: color, shape and shading with three values each.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            features: vec![
                Feature::new("color", ["red", "blue", "green"]),
                Feature::new("shape", ["diamond", "squiggle", "capsule"]),
                Feature::new("shading", ["solid", "striped", "empty"]),
            ],
        }
    }

    /// Feature definitions, in theme order.
    #[must_use]
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Cards per set. Equal to the number of features, and also the
    /// highest figure count a card can show.
    #[must_use]
    pub fn set_size(&self) -> usize {
        self.features.len()
    }

    /// Values per feature (the same for every feature).
    #[must_use]
    pub fn values_per_feature(&self) -> usize {
        self.features[0].value_count()
    }

    /// Number of cards a full deck has: `V^set_size * set_size`.
    ///
    /// Never more than `u32::MAX`, so every card gets a distinct `CardId`.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.values_per_feature().pow(self.set_size() as u32) * self.set_size()
    }
}

/// `values^features * features`, or `None` past `u32::MAX` cards.
fn checked_deck_size(features: usize, values: usize) -> Option<usize> {
    let exponent = u32::try_from(features).ok()?;
    values
        .checked_pow(exponent)?
        .checked_mul(features)
        .filter(|&cards| u32::try_from(cards).is_ok())
}

/// Complete game configuration.
///
/// Built from a theme; deal sizing defaults to
/// `DEFAULT_INITIAL_TABLE_COUNT` cards up front and `set_size` cards per deal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SettingsDef")]
pub struct GameSettings {
    theme: Theme,
    initial_table_count: usize,
    cards_per_deal: usize,
}

#[derive(Deserialize)]
struct SettingsDef {
    theme: Theme,
    #[serde(default)]
    initial_table_count: Option<usize>,
    #[serde(default)]
    cards_per_deal: Option<usize>,
}

impl TryFrom<SettingsDef> for GameSettings {
    type Error = SettingsError;

    fn try_from(def: SettingsDef) -> Result<Self, Self::Error> {
        let mut settings = GameSettings::new(def.theme);
        if let Some(count) = def.initial_table_count {
            settings = settings.with_initial_table_count(count);
        }
        if let Some(count) = def.cards_per_deal {
            settings = settings.with_cards_per_deal(count)?;
        }
        Ok(settings)
    }
}

impl GameSettings {
    /// Create settings for a theme with default deal sizing.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let cards_per_deal = theme.set_size();
        Self {
            theme,
            initial_table_count: DEFAULT_INITIAL_TABLE_COUNT,
            cards_per_deal,
        }
    }

    /// Classic game: classic theme, 12 cards up front, 3 per deal.
    #[must_use]
    pub fn classic() -> Self {
        Self::new(Theme::classic())
    }

    /// Set how many cards are dealt to the table when a game starts.
    ///
    /// Counts above the deck size simply deal the whole deck.
    #[must_use]
    pub fn with_initial_table_count(mut self, count: usize) -> Self {
        self.initial_table_count = count;
        self
    }

    /// Set how many cards `add_cards` moves from the deck to the table.
    pub fn with_cards_per_deal(mut self, count: usize) -> Result<Self, SettingsError> {
        if count == 0 {
            return Err(SettingsError::ZeroCardsPerDeal);
        }
        self.cards_per_deal = count;
        Ok(self)
    }

    /// The theme cards are generated from.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Cards dealt to the table at the start of a game.
    #[must_use]
    pub fn initial_table_count(&self) -> usize {
        self.initial_table_count
    }

    /// Cards moved to the table per `add_cards`.
    #[must_use]
    pub fn cards_per_deal(&self) -> usize {
        self.cards_per_deal
    }

    /// Shorthand for `theme().set_size()`.
    #[must_use]
    pub fn set_size(&self) -> usize {
        self.theme.set_size()
    }
}
