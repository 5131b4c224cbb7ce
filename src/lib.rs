// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Boardwalk: a Monte Carlo simulator for a Monopoly-style board game.
//!
//! The crate plays many independent games to completion under a fixed
//! stochastic policy and aggregates outcome statistics:
//! - turns until a single player remains,
//! - laps around the board until every purchasable tile is owned,
//! - winner identity.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │       Trial Driver (rayon)          │
//! ├─────────────────────────────────────┤
//! │   Turn State Machine (GameState)    │
//! ├─────────────────────────────────────┤
//! │  Economic Rules / Board / Players   │
//! └─────────────────────────────────────┘
//! ```
//!
//! Each game owns its board and player records exclusively, so trials are
//! embarrassingly parallel: the driver is a parallel map over seeds with
//! nothing shared but the result accumulator.

pub mod error;
pub mod game;
pub mod trial;

pub use error::ConfigError;

// Re-export key game types at crate root for convenience
pub use game::{
    Board, ColorGroup, GameConfig, GameOutcome, GameState, Player, PlayerId, Policy, RngPolicy,
    Tile, TileCategory,
};
