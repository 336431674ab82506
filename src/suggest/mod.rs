//! Item-name suggestions
//!
//! The autocomplete core: a fixed catalog of known item names and a pure
//! matcher that ranks them against whatever the user has typed so far.

pub mod catalog;
pub mod matcher;

pub use catalog::{Catalog, BUILT_IN};
pub use matcher::{edit_distance, suggest, FALLBACK_LIMIT};
