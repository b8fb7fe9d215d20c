//! # set-engine
//!
//! Rules engine for the card-matching game Set.
//!
//! ## Design Principles
//!
//! 1. **Theme-Driven**: No hardcoded features. A `Theme` lists the feature
//!    dimensions and their values; the set size is the number of features.
//!
//! 2. **Identity, Not Position**: Every intent takes a `CardId`. Cards are
//!    never deleted, only moved between zones, so ids stay valid for the
//!    whole game.
//!
//! 3. **Gesture-Driven**: No timers. Matched and mismatched feedback is
//!    cleared by the next selection, never in the background.
//!
//! ## Modules
//!
//! - `core`: Card ids, RNG, themes and settings
//! - `cards`: Cards, feature maps, selection status
//! - `zones`: Deck/table/removed tracking
//! - `rules`: The set rule and the combination search
//! - `game`: The `SetGame` engine and its events
//!
//! ## Example
//!
//! ```
//! use set_engine::{GameSettings, SetGame};
//!
//! let mut game = SetGame::with_seed(GameSettings::classic(), 1);
//! while !game.has_available_set() && !game.deck_cards().is_empty() {
//!     game.add_cards();
//! }
//! let table = game.table_cards().len();
//! assert!(table >= 12);
//! ```

pub mod core;
pub mod zones;
pub mod cards;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    CardId, GameRng,
    Feature, Theme, ThemeError, GameSettings, SettingsError,
};

pub use crate::zones::{Zone, ZoneManager, ZonePosition};

pub use crate::cards::{Card, Features, SelectionStatus};

pub use crate::rules::{is_set, find_combination, any_combination};

pub use crate::game::{SetGame, GameEvent, EventQueue, MAX_PENDING_EVENTS};
