//! Game invariants - structural consistency checks that detect bugs.
//!
//! These should NEVER trigger in a correctly implemented game. They are
//! asserted after every turn in debug builds and exercised directly by
//! tests; a violation means the turn machine or the rules engine broke a
//! bookkeeping guarantee, not that a game went badly.

use crate::game::{GameState, TileCategory, BOARD_TILES, PURCHASABLE_TILES};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all game invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    // Tile ownership must be bidirectional and restricted to purchasable
    // categories.
    for tile in state.board.tiles() {
        if let Some(owner) = tile.owner {
            if !tile.category.is_purchasable() {
                violations.push(InvariantViolation {
                    message: format!(
                        "non-purchasable tile {} ({}) has owner {owner}",
                        tile.index, tile.name
                    ),
                });
            }
            let listed = state
                .players
                .get(usize::from(owner))
                .is_some_and(|p| p.owned.contains(&tile.index));
            if !listed {
                violations.push(InvariantViolation {
                    message: format!(
                        "tile {} owned by player {owner} but missing from their holdings",
                        tile.index
                    ),
                });
            }
        }
    }

    for player in &state.players {
        // Holdings must point back at tiles this player owns.
        let mut railroads = 0u32;
        let mut utilities = 0u32;
        for &idx in &player.owned {
            match state.board.get(idx) {
                Some(tile) if tile.owner == Some(player.id) => match tile.category {
                    TileCategory::Railroad => railroads += 1,
                    TileCategory::Utility => utilities += 1,
                    _ => {}
                },
                _ => violations.push(InvariantViolation {
                    message: format!(
                        "player {} lists tile {idx} they do not own",
                        player.id
                    ),
                }),
            }
        }
        if railroads != player.railroads_owned || utilities != player.utilities_owned {
            violations.push(InvariantViolation {
                message: format!(
                    "player {} counters ({}, {}) disagree with holdings ({railroads}, {utilities})",
                    player.id, player.railroads_owned, player.utilities_owned
                ),
            });
        }

        if player.position >= BOARD_TILES {
            violations.push(InvariantViolation {
                message: format!(
                    "player {} position {} outside the board",
                    player.id, player.position
                ),
            });
        }

        // Streaks are reset before they can rest at their limits.
        if player.consecutive_doubles >= 3 {
            violations.push(InvariantViolation {
                message: format!(
                    "player {} doubles streak {} was not resolved",
                    player.id, player.consecutive_doubles
                ),
            });
        }
        if !player.in_jail && player.jail_turns != 0 {
            violations.push(InvariantViolation {
                message: format!("player {} has jail turns but is not jailed", player.id),
            });
        }
    }

    // The purchase counter mirrors actual board ownership.
    let purchased = state.board.purchased_count();
    if purchased != state.properties_bought || purchased > PURCHASABLE_TILES {
        violations.push(InvariantViolation {
            message: format!(
                "purchase counter {} disagrees with board ownership {purchased}",
                state.properties_bought
            ),
        });
    }
    if state.all_properties_bought != (state.properties_bought == PURCHASABLE_TILES) {
        violations.push(InvariantViolation {
            message: format!(
                "sellout flag {} inconsistent with {} purchases",
                state.all_properties_bought, state.properties_bought
            ),
        });
    }

    // Elimination bookkeeping and win detection.
    let alive = state.players.iter().filter(|p| !p.eliminated).count();
    if alive != state.remaining_players() || alive == 0 {
        violations.push(InvariantViolation {
            message: format!(
                "remaining-player counter {} disagrees with {alive} alive players",
                state.remaining_players()
            ),
        });
    }
    if let Some(winner) = state.winner {
        let winner_alive = state
            .players
            .get(usize::from(winner))
            .is_some_and(|p| !p.eliminated);
        if alive != 1 || !winner_alive {
            violations.push(InvariantViolation {
                message: format!("winner {winner} set while {alive} players remain"),
            });
        }
    }

    violations
}

/// Assert all game invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with a detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(state: &GameState) {
    let violations = check_invariants(state);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Game invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_state: &GameState) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{purchase, GameConfig, RngPolicy};

    fn fresh_game() -> GameState {
        GameState::new(GameConfig {
            players: 2,
            ..GameConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_fresh_game_passes() {
        let game = fresh_game();
        assert!(check_invariants(&game).is_empty());
    }

    #[test]
    fn test_played_game_passes() {
        let mut game = fresh_game();
        let mut policy = RngPolicy::new(5);
        game.play(&mut policy);
        assert!(check_invariants(&game).is_empty());
    }

    #[test]
    fn test_one_sided_ownership_detected() {
        let mut game = fresh_game();
        game.board.get_mut(1).unwrap().owner = Some(0);

        let violations = check_invariants(&game);
        assert!(!violations.is_empty());
        assert!(violations[0].message.contains("missing from their holdings"));
    }

    #[test]
    fn test_non_purchasable_owner_detected() {
        let mut game = fresh_game();
        game.board.get_mut(0).unwrap().owner = Some(1);

        let violations = check_invariants(&game);
        assert!(violations
            .iter()
            .any(|v| v.message.contains("non-purchasable")));
    }

    #[test]
    fn test_stale_counter_detected() {
        let mut game = fresh_game();
        purchase(&mut game, 0, 5);
        game.players[0].railroads_owned = 0;

        let violations = check_invariants(&game);
        assert!(violations.iter().any(|v| v.message.contains("counters")));
    }

    #[test]
    fn test_out_of_board_position_detected() {
        let mut game = fresh_game();
        game.players[1].position = BOARD_TILES;

        let violations = check_invariants(&game);
        assert!(violations.iter().any(|v| v.message.contains("position")));
    }

    #[test]
    fn test_desynced_purchase_counter_detected() {
        let mut game = fresh_game();
        purchase(&mut game, 0, 39);
        game.properties_bought = 0;

        let violations = check_invariants(&game);
        assert!(violations
            .iter()
            .any(|v| v.message.contains("purchase counter")));
    }

    #[test]
    fn test_premature_winner_detected() {
        let mut game = fresh_game();
        game.winner = Some(0);

        let violations = check_invariants(&game);
        assert!(violations.iter().any(|v| v.message.contains("winner")));
    }
}
