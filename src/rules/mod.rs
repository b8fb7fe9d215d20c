//! Set rules: group validation and the combination search used to look
//! for sets on the table.
//!
//! The engine calls into these functions but the functions know nothing
//! about zones or selection; they work on plain cards and index ranges.

pub mod combinations;
pub mod validation;

pub use combinations::{any_combination, find_combination, Combination};
pub use validation::{all_distinct, all_equal, dimension_ok, is_set};
