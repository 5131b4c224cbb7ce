//! Game state and the turn state machine.

use crate::error::ConfigError;
use crate::game::board::JAIL_TILE;
use crate::game::{
    auction, can_afford, invariants, pay_rent, purchase, Board, Player, PlayerId, Policy,
    TileCategory, BOARD_TILES,
};

/// Cash credited for passing GO.
pub const GO_BONUS: i64 = 200;

/// Fine for sitting out three jail turns without doubles, debited
/// unconditionally.
pub const JAIL_FINE: i64 = 50;

/// Free-parking credit under house rules.
pub const PARKING_BONUS: i64 = 500;

/// Jail turns served before the fine forces release.
const JAIL_TERM: u8 = 3;

/// Consecutive doubles that send a player to jail.
const DOUBLES_LIMIT: u8 = 3;

/// Configuration for one game, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of players (at least 2).
    pub players: usize,
    /// House rules: free-parking pays out and declined tiles are NOT
    /// auctioned. With house rules off, declined tiles go to auction.
    pub house_rules: bool,
    /// Turns between inflation increases (at least 1).
    pub inflation_period: u32,
    /// Amount the inflation rate rises each period.
    pub inflation_step: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: 4,
            house_rules: false,
            inflation_period: 50,
            inflation_step: 1,
        }
    }
}

impl GameConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for fewer than two players or a zero
    /// inflation period.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players < 2 {
            return Err(ConfigError::TooFewPlayers(self.players));
        }
        if self.players > usize::from(PlayerId::MAX) + 1 {
            return Err(ConfigError::TooManyPlayers(self.players));
        }
        if self.inflation_period == 0 {
            return Err(ConfigError::ZeroInflationPeriod);
        }
        Ok(())
    }
}

/// Final statistics of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    /// Turns played until a single player remained.
    pub turns: u32,
    /// Lap counter when the 28th purchasable tile sold, or -1 if the
    /// board never sold out.
    pub sellout_laps: i32,
    /// The surviving player.
    pub winner: PlayerId,
}

/// Complete state of one game.
///
/// Constructed once per trial with a fresh board and players, mutated
/// only through the turn machine, and read out once a winner is set.
#[derive(Debug, Clone)]
pub struct GameState {
    /// The board, owned exclusively by this game.
    pub board: Board,
    /// All players, indexed by id.
    pub players: Vec<Player>,
    /// Completed full turns.
    pub turn: u32,
    /// Current inflation rate applied to street rents.
    pub inflation: u32,
    /// Purchasable tiles sold so far (0-28, non-decreasing).
    pub properties_bought: u32,
    /// Whether every purchasable tile has an owner (monotonic).
    pub all_properties_bought: bool,
    /// The winner, once exactly one player remains.
    pub winner: Option<PlayerId>,
    active: usize,
    laps: i32,
    sellout_laps: i32,
    remaining: usize,
    config: GameConfig,
}

impl GameState {
    /// Create a fresh game from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let players = (0..config.players)
            .map(|i| Player::new(i as PlayerId))
            .collect();

        Ok(Self {
            board: Board::standard(),
            players,
            turn: 0,
            inflation: 0,
            properties_bought: 0,
            all_properties_bought: false,
            winner: None,
            active: 0,
            laps: -1,
            sellout_laps: -1,
            remaining: config.players,
            config,
        })
    }

    /// Index of the player whose turn comes next.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Times any player has crossed GO; starts at -1 before the first lap.
    #[must_use]
    pub fn laps(&self) -> i32 {
        self.laps
    }

    /// Lap counter at the moment the board sold out, -1 if it never did.
    #[must_use]
    pub fn sellout_laps(&self) -> i32 {
        self.sellout_laps
    }

    /// Players still in the game.
    #[must_use]
    pub fn remaining_players(&self) -> usize {
        self.remaining
    }

    /// The configuration this game was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Run the game to completion and report its outcome.
    pub fn play(&mut self, policy: &mut impl Policy) -> GameOutcome {
        let winner = loop {
            if let Some(w) = self.winner {
                break w;
            }
            self.play_turn(policy);
        };

        GameOutcome {
            turns: self.turn,
            sellout_laps: self.sellout_laps,
            winner,
        }
    }

    /// Advance the game by one active-player turn.
    ///
    /// A skipped eliminated player and a third-consecutive-doubles jailing
    /// both end the turn early without counting toward `turn`.
    pub fn play_turn(&mut self, policy: &mut impl Policy) {
        self.step(policy);
        invariants::assert_invariants(self);
    }

    fn step(&mut self, policy: &mut impl Policy) {
        // Inflation accrues on the schedule before anything else happens.
        if self.turn % self.config.inflation_period == 0 {
            self.inflation += self.config.inflation_step;
        }

        let current = self.active;
        if self.players[current].eliminated {
            self.advance_active();
            return;
        }

        let (die1, die2) = policy.roll_dice();
        debug_assert!((1..=6).contains(&die1) && (1..=6).contains(&die2));
        let doubles = die1 == die2;
        let roll_total = u32::from(die1) + u32::from(die2);

        if self.players[current].in_jail {
            self.resolve_jail(current, doubles);
        } else if doubles {
            self.players[current].consecutive_doubles += 1;
            if self.players[current].consecutive_doubles == DOUBLES_LIMIT {
                // Straight to jail: no movement, no tile effect this turn.
                self.players[current].jail(JAIL_TILE);
                self.advance_active();
                return;
            }
        } else {
            self.players[current].consecutive_doubles = 0;
        }

        // Movement with wraparound. A wrap means GO was passed: a single
        // roll is at most 12 on a 40-tile board, so position can only
        // decrease by crossing GO.
        let previous = self.players[current].position;
        let landed = (previous + roll_total as usize) % BOARD_TILES;
        self.players[current].position = landed;
        if landed < previous {
            self.players[current].cash += GO_BONUS;
            self.laps += 1;
        }

        self.resolve_tile(current, landed, roll_total, policy);

        self.advance_active();

        if self.remaining == 1 && self.winner.is_none() {
            self.winner = self.players.iter().find(|p| !p.eliminated).map(|p| p.id);
        }

        self.turn += 1;
    }

    /// Jail bookkeeping for the active player. Doubles release instantly;
    /// the third failed turn releases against the fine. Movement with the
    /// same roll follows either way.
    fn resolve_jail(&mut self, current: usize, doubles: bool) {
        if doubles {
            self.players[current].release();
        } else {
            self.players[current].jail_turns += 1;
            if self.players[current].jail_turns == JAIL_TERM {
                self.players[current].cash -= JAIL_FINE;
                self.players[current].release();
            }
        }
    }

    /// Resolve the effect of the tile the active player landed on.
    fn resolve_tile(
        &mut self,
        current: usize,
        tile_index: usize,
        roll_total: u32,
        policy: &mut impl Policy,
    ) {
        let Some(tile) = self.board.get(tile_index).copied() else {
            return;
        };

        match tile.category {
            TileCategory::Property | TileCategory::Railroad | TileCategory::Utility => {
                self.resolve_ownable(current, tile_index, roll_total, policy);
            }
            TileCategory::Tax => {
                let amount = i64::from(tile.rent);
                if self.players[current].cash < amount {
                    self.eliminate(current);
                } else {
                    self.players[current].cash -= amount;
                }
            }
            TileCategory::GoToJail => {
                self.players[current].jail(JAIL_TILE);
            }
            TileCategory::FreeParking => {
                if self.config.house_rules {
                    self.players[current].cash += PARKING_BONUS;
                }
            }
            TileCategory::Go | TileCategory::Chance | TileCategory::Chest | TileCategory::Jail => {}
        }
    }

    /// Purchase, auction, or rent flow for property/railroad/utility tiles.
    fn resolve_ownable(
        &mut self,
        current: usize,
        tile_index: usize,
        roll_total: u32,
        policy: &mut impl Policy,
    ) {
        let Some(tile) = self.board.get(tile_index).copied() else {
            return;
        };

        match tile.owner {
            Some(owner) if usize::from(owner) == current => {}
            Some(_) => pay_rent(self, tile_index, roll_total),
            None => {
                if can_afford(&self.players[current], &tile) && policy.wants_to_buy() {
                    let buyer = self.players[current].id;
                    purchase(self, buyer, tile_index);
                } else if !self.config.house_rules {
                    auction(self, tile_index, policy);
                }
            }
        }
    }

    fn advance_active(&mut self) {
        self.active = (self.active + 1) % self.players.len();
    }

    pub(crate) fn eliminate(&mut self, index: usize) {
        if !self.players[index].eliminated {
            self.players[index].eliminate();
            self.remaining -= 1;
        }
    }

    pub(crate) fn record_sellout(&mut self) {
        self.all_properties_bought = true;
        self.sellout_laps = self.laps;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scripted policy: fixed dice, fixed purchase decision, first bidder.
    struct Scripted {
        rolls: Vec<(u8, u8)>,
        next: usize,
        buy: bool,
    }

    impl Scripted {
        fn new(rolls: &[(u8, u8)], buy: bool) -> Self {
            Self {
                rolls: rolls.to_vec(),
                next: 0,
                buy,
            }
        }
    }

    impl Policy for Scripted {
        fn roll_dice(&mut self) -> (u8, u8) {
            let roll = self.rolls[self.next % self.rolls.len()];
            self.next += 1;
            roll
        }

        fn wants_to_buy(&mut self) -> bool {
            self.buy
        }

        fn pick_bidder(&mut self, _count: usize) -> usize {
            0
        }
    }

    fn game(players: usize) -> GameState {
        GameState::new(GameConfig {
            players,
            ..GameConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_config_validation() {
        assert_eq!(
            GameState::new(GameConfig {
                players: 1,
                ..GameConfig::default()
            })
            .err(),
            Some(ConfigError::TooFewPlayers(1))
        );
        assert_eq!(
            GameState::new(GameConfig {
                inflation_period: 0,
                ..GameConfig::default()
            })
            .err(),
            Some(ConfigError::ZeroInflationPeriod)
        );
        assert!(GameState::new(GameConfig::default()).is_ok());
    }

    #[test]
    fn test_fresh_game_state() {
        let game = game(3);
        assert_eq!(game.players.len(), 3);
        assert_eq!(game.turn, 0);
        assert_eq!(game.laps(), -1);
        assert_eq!(game.sellout_laps(), -1);
        assert_eq!(game.remaining_players(), 3);
        assert!(game.winner.is_none());
    }

    #[test]
    fn test_inflation_accrues_on_schedule() {
        // House rules + never buying keeps the board empty, so no rent
        // can eliminate anyone while the clock runs.
        let mut game = GameState::new(GameConfig {
            players: 2,
            house_rules: true,
            ..GameConfig::default()
        })
        .unwrap();
        let mut policy = Scripted::new(&[(1, 2)], false);

        // Turn 0 is on the schedule (0 % 50 == 0)
        game.play_turn(&mut policy);
        assert_eq!(game.inflation, 1);

        for _ in 0..49 {
            game.play_turn(&mut policy);
        }
        assert_eq!(game.turn, 50);
        game.play_turn(&mut policy);
        assert_eq!(game.inflation, 2);
    }

    #[test]
    fn test_movement_and_go_bonus() {
        let mut game = game(2);
        let mut policy = Scripted::new(&[(1, 2)], false);
        game.players[0].position = 38;

        game.play_turn(&mut policy);

        assert_eq!(game.players[0].position, 1);
        assert_eq!(game.players[0].cash, 1500 + GO_BONUS);
        assert_eq!(game.laps(), 0);
    }

    #[test]
    fn test_no_go_bonus_without_wraparound() {
        let mut game = game(2);
        let mut policy = Scripted::new(&[(1, 2)], false);

        game.play_turn(&mut policy);

        assert_eq!(game.players[0].position, 3);
        // Baltic Ave costs 0, so the auction sale leaves cash untouched
        assert_eq!(game.players[0].cash, 1500);
        assert_eq!(game.laps(), -1);
    }

    #[test]
    fn test_three_doubles_jails_without_moving() {
        let mut game = game(2);
        game.players[0].consecutive_doubles = 2;
        let mut policy = Scripted::new(&[(4, 4)], true);
        let turn_before = game.turn;

        game.play_turn(&mut policy);

        let p0 = &game.players[0];
        assert!(p0.in_jail);
        assert_eq!(p0.position, JAIL_TILE);
        assert_eq!(p0.consecutive_doubles, 0);
        assert_eq!(p0.cash, 1500, "no tile effect may fire");
        assert_eq!(game.turn, turn_before, "turn not consumed");
        assert_eq!(game.active_index(), 1);
    }

    #[test]
    fn test_doubles_release_moves_same_roll() {
        let mut game = game(2);
        game.players[0].jail(JAIL_TILE);
        game.players[0].jail_turns = 1;
        let mut policy = Scripted::new(&[(3, 3)], false);

        game.play_turn(&mut policy);

        let p0 = &game.players[0];
        assert!(!p0.in_jail);
        assert_eq!(p0.jail_turns, 0);
        assert_eq!(p0.position, 16);
    }

    #[test]
    fn test_third_jail_turn_pays_fine_unconditionally() {
        let mut game = game(2);
        game.players[0].jail(JAIL_TILE);
        game.players[0].jail_turns = 2;
        game.players[0].cash = 20; // fine still applies, cash goes negative
        let mut policy = Scripted::new(&[(1, 2)], false);

        game.play_turn(&mut policy);

        let p0 = &game.players[0];
        assert!(!p0.in_jail);
        assert_eq!(p0.cash, 20 - JAIL_FINE);
        assert!(!p0.eliminated, "jail fine never eliminates");
        assert_eq!(p0.position, 13);
    }

    #[test]
    fn test_jailed_player_without_doubles_still_moves() {
        let mut game = game(2);
        game.players[0].jail(JAIL_TILE);
        let mut policy = Scripted::new(&[(2, 5)], false);

        game.play_turn(&mut policy);

        let p0 = &game.players[0];
        assert!(p0.in_jail);
        assert_eq!(p0.jail_turns, 1);
        assert_eq!(p0.position, 17);
    }

    #[test]
    fn test_go_to_jail_tile() {
        let mut game = game(2);
        game.players[0].position = 27;
        let mut policy = Scripted::new(&[(1, 2)], false);

        game.play_turn(&mut policy);

        let p0 = &game.players[0];
        assert!(p0.in_jail);
        assert_eq!(p0.position, JAIL_TILE);
    }

    #[test]
    fn test_tax_eliminates_without_deduction() {
        let mut game = game(3);
        game.players[0].cash = 10;
        game.players[0].position = 0;
        let mut policy = Scripted::new(&[(1, 3)], false); // lands on Income Tax

        game.play_turn(&mut policy);

        let p0 = &game.players[0];
        assert!(p0.eliminated);
        assert_eq!(p0.cash, 10, "elimination preempts payment");
        assert_eq!(game.remaining_players(), 2);
        assert!(game.winner.is_none());
    }

    #[test]
    fn test_tax_debits_when_affordable() {
        let mut game = game(2);
        let mut policy = Scripted::new(&[(1, 3)], false);

        game.play_turn(&mut policy);

        assert_eq!(game.players[0].cash, 1300);
        assert!(!game.players[0].eliminated);
    }

    #[test]
    fn test_free_parking_default_no_effect() {
        let mut game = game(2);
        game.players[0].position = 15;
        let mut policy = Scripted::new(&[(2, 3)], false);

        game.play_turn(&mut policy);

        assert_eq!(game.players[0].position, 20);
        assert_eq!(game.players[0].cash, 1500);
    }

    #[test]
    fn test_free_parking_house_rules_bonus() {
        let mut game = GameState::new(GameConfig {
            players: 2,
            house_rules: true,
            ..GameConfig::default()
        })
        .unwrap();
        game.players[0].position = 15;
        let mut policy = Scripted::new(&[(2, 3)], false);

        game.play_turn(&mut policy);

        assert_eq!(game.players[0].cash, 1500 + PARKING_BONUS);
    }

    #[test]
    fn test_house_rules_disable_auctions() {
        let mut game = GameState::new(GameConfig {
            players: 2,
            house_rules: true,
            ..GameConfig::default()
        })
        .unwrap();
        let mut policy = Scripted::new(&[(2, 4)], false); // declines Oriental

        game.play_turn(&mut policy);

        assert!(game.board.get(6).unwrap().owner.is_none());
        assert_eq!(game.properties_bought, 0);
    }

    #[test]
    fn test_declined_tile_goes_to_auction_by_default() {
        let mut game = game(2);
        let mut policy = Scripted::new(&[(2, 4)], false); // declines Oriental

        game.play_turn(&mut policy);

        assert_eq!(game.board.get(6).unwrap().owner, Some(1));
        assert_eq!(game.players[1].cash, 1400);
    }

    #[test]
    fn test_landing_on_own_tile_has_no_effect() {
        let mut game = game(2);
        crate::game::purchase(&mut game, 0, 6);
        let cash = game.players[0].cash;
        let mut policy = Scripted::new(&[(2, 4)], true);

        game.play_turn(&mut policy);

        assert_eq!(game.players[0].cash, cash);
    }

    #[test]
    fn test_eliminated_player_skipped_without_roll_or_turn() {
        let mut game = game(3);
        game.eliminate(0);
        let turn_before = game.turn;
        let mut policy = Scripted::new(&[(6, 1)], false);

        game.play_turn(&mut policy);

        assert_eq!(game.turn, turn_before);
        assert_eq!(game.active_index(), 1);
        assert_eq!(game.players[0].position, 0, "no dice consumed");
    }

    #[test]
    fn test_last_survivor_wins() {
        let mut game = game(2);
        // Player 1 owns Boardwalk; player 0 cannot pay the rent
        crate::game::purchase(&mut game, 1, 39);
        game.players[0].cash = 0;
        game.players[0].position = 32;
        let mut policy = Scripted::new(&[(3, 4)], false);

        game.play_turn(&mut policy);

        assert!(game.players[0].eliminated);
        assert_eq!(game.winner, Some(1));
        assert_eq!(game.turn, 1, "final turn still counts");
    }

    #[test]
    fn test_full_game_terminates_with_random_policy() {
        for seed in 0..20 {
            let mut game = game(4);
            let mut policy = crate::game::RngPolicy::new(seed);
            let outcome = game.play(&mut policy);

            assert!(usize::from(outcome.winner) < 4);
            assert_eq!(game.remaining_players(), 1);
            assert!(outcome.turns > 0);
            assert_eq!(game.winner, Some(outcome.winner));
            assert!(!game.players[usize::from(outcome.winner)].eliminated);
        }
    }

    #[test]
    fn test_play_is_deterministic_per_seed() {
        let run = |seed| {
            let mut g = game(4);
            let mut policy = crate::game::RngPolicy::new(seed);
            g.play(&mut policy)
        };
        assert_eq!(run(99), run(99));
    }
}
