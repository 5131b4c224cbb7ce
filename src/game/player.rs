//! Player state management.

use crate::game::{Tile, TileCategory};

/// Unique identifier for a player, equal to its index in the game's list.
pub type PlayerId = u8;

/// Cash every player starts with.
pub const STARTING_CASH: i64 = 1500;

/// State for a single player.
///
/// Cash is signed: the unconditional jail fine can push it below zero
/// without eliminating the player. Only failed rent and tax payments
/// eliminate.
#[derive(Debug, Clone)]
pub struct Player {
    /// Unique identifier for this player.
    pub id: PlayerId,
    /// Current cash.
    pub cash: i64,
    /// Board indices of tiles this player owns.
    pub owned: Vec<usize>,
    /// Current board position (0-39).
    pub position: usize,
    /// Consecutive doubles rolled; three in a row means jail.
    pub consecutive_doubles: u8,
    /// Whether the player sits in jail.
    pub in_jail: bool,
    /// Turns served in jail without rolling doubles (0-2).
    pub jail_turns: u8,
    /// Railroads owned, kept in step with `owned` at purchase time.
    pub railroads_owned: u32,
    /// Utilities owned, kept in step with `owned` at purchase time.
    pub utilities_owned: u32,
    /// Whether the player has been eliminated (terminal).
    pub eliminated: bool,
}

impl Player {
    /// Create a new player at GO with the starting cash.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            cash: STARTING_CASH,
            owned: Vec::new(),
            position: 0,
            consecutive_doubles: 0,
            in_jail: false,
            jail_turns: 0,
            railroads_owned: 0,
            utilities_owned: 0,
            eliminated: false,
        }
    }

    /// Record ownership of a tile, maintaining the derived counters.
    pub fn acquire(&mut self, tile: &Tile) {
        self.owned.push(tile.index);
        match tile.category {
            TileCategory::Railroad => self.railroads_owned += 1,
            TileCategory::Utility => self.utilities_owned += 1,
            _ => {}
        }
    }

    /// Eliminate this player. Terminal; never reverts.
    pub fn eliminate(&mut self) {
        self.eliminated = true;
    }

    /// Send this player to jail, resetting the doubles streak.
    pub fn jail(&mut self, jail_tile: usize) {
        self.in_jail = true;
        self.consecutive_doubles = 0;
        self.position = jail_tile;
    }

    /// Release this player from jail.
    pub fn release(&mut self) {
        self.in_jail = false;
        self.jail_turns = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Board;

    #[test]
    fn test_player_creation() {
        let player = Player::new(3);
        assert_eq!(player.id, 3);
        assert_eq!(player.cash, STARTING_CASH);
        assert_eq!(player.position, 0);
        assert!(player.owned.is_empty());
        assert!(!player.in_jail);
        assert!(!player.eliminated);
    }

    #[test]
    fn test_acquire_updates_derived_counters() {
        let board = Board::standard();
        let mut player = Player::new(0);

        player.acquire(board.get(1).unwrap()); // street
        player.acquire(board.get(5).unwrap()); // railroad
        player.acquire(board.get(12).unwrap()); // utility
        player.acquire(board.get(15).unwrap()); // railroad

        assert_eq!(player.owned, vec![1, 5, 12, 15]);
        assert_eq!(player.railroads_owned, 2);
        assert_eq!(player.utilities_owned, 1);
    }

    #[test]
    fn test_eliminate_is_terminal() {
        let mut player = Player::new(0);
        player.eliminate();
        assert!(player.eliminated);
    }

    #[test]
    fn test_jail_and_release() {
        let mut player = Player::new(0);
        player.consecutive_doubles = 2;
        player.jail(10);

        assert!(player.in_jail);
        assert_eq!(player.position, 10);
        assert_eq!(player.consecutive_doubles, 0);

        player.jail_turns = 2;
        player.release();
        assert!(!player.in_jail);
        assert_eq!(player.jail_turns, 0);
    }
}
