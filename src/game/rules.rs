//! Economic rules: rent math, color-set detection, and the settlement
//! operations (purchase, auction, rent) that move cash and ownership.
//!
//! Rent transfers and auction sales are zero-sum between the two parties;
//! taxes and the jail fine leave the economy. A failed rent or tax payment
//! eliminates the payer instead of transferring anything.

use crate::game::{
    GameState, Player, PlayerId, Policy, Tile, TileCategory, PURCHASABLE_TILES,
};

/// Base railroad rent with one railroad owned; doubles per extra railroad.
const RAILROAD_BASE_RENT: u32 = 25;

/// Utility rent multiplier with one utility owned.
const UTILITY_SINGLE_MULTIPLIER: u32 = 4;

/// Utility rent multiplier with both utilities owned.
const UTILITY_DOUBLE_MULTIPLIER: u32 = 10;

/// Check whether a player can cover a tile's purchase cost.
#[must_use]
pub fn can_afford(player: &Player, tile: &Tile) -> bool {
    player.cash >= i64::from(tile.cost)
}

/// Rent for a railroad whose owner holds `railroads_owned` railroads.
///
/// The sequence for 1..=4 owned is 25, 50, 100, 200. Inflation never
/// applies to railroad rent.
#[must_use]
pub fn railroad_rent(railroads_owned: u32) -> u32 {
    debug_assert!((1..=4).contains(&railroads_owned));
    RAILROAD_BASE_RENT * (1 << railroads_owned.saturating_sub(1))
}

/// Rent for a utility, derived from the two-die total that landed here.
#[must_use]
pub fn utility_rent(utilities_owned: u32, roll_total: u32) -> u32 {
    debug_assert!((1..=2).contains(&utilities_owned));
    if utilities_owned == 1 {
        UTILITY_SINGLE_MULTIPLIER * roll_total
    } else {
        UTILITY_DOUBLE_MULTIPLIER * roll_total
    }
}

/// Check whether `owner` holds the full color set that the street at
/// `tile_index` belongs to.
///
/// The evaluated street counts once; each *other* owned street of the
/// same group adds one. Railroads and utilities have no color group and
/// never form sets.
#[must_use]
pub fn owns_color_set(state: &GameState, owner: PlayerId, tile_index: usize) -> bool {
    let Some(group) = state.board.get(tile_index).and_then(|t| t.color) else {
        return false;
    };
    let player = &state.players[usize::from(owner)];

    let mut count = 1u32;
    for &idx in &player.owned {
        if idx != tile_index && state.board.get(idx).and_then(|t| t.color) == Some(group) {
            count += 1;
        }
    }
    count == group.set_size()
}

/// Compute the rent owed for landing on an owned tile.
///
/// - streets: base rent scaled by `(1 + inflation)`, doubled when the
///   owner holds the full color set;
/// - railroads: the 25/50/100/200 ladder, inflation-free;
/// - utilities: 4x or 10x the landing roll total.
///
/// Returns 0 for unowned or non-rentable tiles.
#[must_use]
pub fn compute_rent(state: &GameState, tile_index: usize, roll_total: u32) -> u32 {
    let Some(tile) = state.board.get(tile_index) else {
        return 0;
    };
    let Some(owner) = tile.owner else {
        return 0;
    };

    match tile.category {
        TileCategory::Property => {
            let base = tile.rent * (1 + state.inflation);
            if owns_color_set(state, owner, tile_index) {
                2 * base
            } else {
                base
            }
        }
        TileCategory::Railroad => {
            railroad_rent(state.players[usize::from(owner)].railroads_owned)
        }
        TileCategory::Utility => {
            utility_rent(state.players[usize::from(owner)].utilities_owned, roll_total)
        }
        _ => 0,
    }
}

/// Transfer an unowned tile to `buyer` at full cost.
///
/// The caller gates affordability; cash is debited without a re-check and
/// may go negative. Sets the owner, maintains the buyer's derived
/// counters, and advances the global purchase counter, snapshotting the
/// lap milestone when the final purchasable tile sells.
pub fn purchase(state: &mut GameState, buyer: PlayerId, tile_index: usize) {
    let Some(tile) = state.board.get_mut(tile_index) else {
        return;
    };
    debug_assert!(!tile.is_purchased(), "purchase of an already-owned tile");
    debug_assert!(tile.category.is_purchasable());

    tile.owner = Some(buyer);
    let bought = *tile;

    let player = &mut state.players[usize::from(buyer)];
    player.cash -= i64::from(bought.cost);
    player.acquire(&bought);

    state.properties_bought += 1;
    if state.properties_bought == PURCHASABLE_TILES {
        state.record_sellout();
    }
}

/// Auction an unowned tile among everyone except the active player.
///
/// Eligibility (still in the game, can afford the full cost) is evaluated
/// at auction time. With no eligible bidder the tile simply stays on the
/// market; otherwise one bidder is picked uniformly and pays full cost.
pub fn auction(state: &mut GameState, tile_index: usize, policy: &mut impl Policy) {
    let Some(cost) = state.board.get(tile_index).map(|t| t.cost) else {
        return;
    };
    let active = state.active_index();

    let bidders: Vec<PlayerId> = state
        .players
        .iter()
        .filter(|p| usize::from(p.id) != active && !p.eliminated && p.cash >= i64::from(cost))
        .map(|p| p.id)
        .collect();

    if bidders.is_empty() {
        return;
    }

    let winner = bidders[policy.pick_bidder(bidders.len())];
    purchase(state, winner, tile_index);
}

/// Settle rent for the active player landing on someone else's tile.
///
/// If the active player cannot cover the rent they are eliminated and no
/// cash moves; otherwise the exact amount transfers to the owner.
pub fn pay_rent(state: &mut GameState, tile_index: usize, roll_total: u32) {
    let rent = i64::from(compute_rent(state, tile_index, roll_total));
    let Some(owner) = state.board.get(tile_index).and_then(|t| t.owner) else {
        return;
    };
    let active = state.active_index();

    if state.players[active].cash < rent {
        state.eliminate(active);
    } else {
        state.players[active].cash -= rent;
        state.players[usize::from(owner)].cash += rent;
    }
}
