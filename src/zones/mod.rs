//! Zone system for card locations.
//!
//! A Set game has three zones: the deck, the table and the removed pile.
//! Every card is in exactly one of them at any time.
//!
//! ## Key Types
//!
//! - `Zone`: Deck, Table or Removed
//! - `ZoneManager`: Card location tracking, ordering and movement
//! - `ZonePosition`: Position specifier when inserting into a zone

pub mod manager;

pub use manager::{Zone, ZoneManager, ZonePosition};
