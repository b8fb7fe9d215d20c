//! The game engine.
//!
//! ## Key Types
//!
//! - `SetGame`: owns the cards; deck generation, zone views, set checks,
//!   selection handling and table maintenance
//! - `GameEvent`: change notifications for collaborators
//!
//! A `SetGame` is a plain owned value. Whoever holds it drives it through
//! `&mut self` intents, one at a time, and reads the derived views or the
//! drained events afterwards.

mod events;
mod selection;
mod state;

pub use events::{EventQueue, GameEvent, MAX_PENDING_EVENTS};
pub use state::SetGame;
