//! Core data models for season player statistics.

mod ids;
mod profile;
mod row;

pub use ids::*;
pub use profile::*;
pub use row::*;
