//! Core engine types: card ids, RNG, configuration.
//!
//! These are the leaf building blocks. Games are configured via
//! `GameSettings` rather than by modifying the engine.

pub mod entity;
pub mod rng;
pub mod config;

pub use entity::CardId;
pub use rng::GameRng;
pub use config::{
    Feature, GameSettings, SettingsError, Theme, ThemeError, DEFAULT_INITIAL_TABLE_COUNT,
};
