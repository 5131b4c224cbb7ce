//! Game layer for Boardwalk.
//!
//! Implements the single-game simulation core:
//! - Board catalog with the fixed 40-tile layout
//! - Per-player state (cash, holdings, position, jail)
//! - Economic rules (purchase, auction, rent, taxes)
//! - Turn state machine with elimination and win detection

mod board;
mod invariants;
mod player;
mod policy;
mod rules;
mod state;

pub use board::{Board, ColorGroup, Tile, TileCategory, BOARD_TILES, JAIL_TILE, PURCHASABLE_TILES};
pub use invariants::{assert_invariants, check_invariants, InvariantViolation};
pub use player::{Player, PlayerId, STARTING_CASH};
pub use policy::{Policy, RngPolicy};
pub use rules::{
    auction, can_afford, compute_rent, owns_color_set, pay_rent, purchase, railroad_rent,
    utility_rent,
};
pub use state::{GameConfig, GameOutcome, GameState, GO_BONUS, JAIL_FINE, PARKING_BONUS};
