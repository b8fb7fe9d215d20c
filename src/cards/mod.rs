//! Card system: printed features and runtime card state.
//!
//! ## Key Types
//!
//! - `Features`: ordered feature name -> value mapping
//! - `Card`: id, figure count, features, zone and selection status
//! - `SelectionStatus`: matching feedback state of a card

pub mod card;
pub mod features;

pub use card::{Card, SelectionStatus};
pub use features::Features;
