//! # NBA Stats
//!
//! An in-memory HTTP API over one season of NBA player statistics.
//!
//! ## Architecture
//!
//! - **models**: Season rows, player profiles and their sections
//! - **storage**: Season file loading (CSV)
//! - **calculate**: Per-game averages and rounding
//! - **ingest**: Building profiles from season rows
//! - **store**: The mutable profile store, lookups and projections
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod ingest;
pub mod models;
pub mod storage;
pub mod store;

pub use models::*;
