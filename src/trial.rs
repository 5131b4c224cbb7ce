//! Trial driver: runs many independent games and aggregates statistics.
//!
//! Each trial owns its board, players, and RNG exclusively, so the driver
//! is a parallel map over seeds. Aggregation uses rayon's fold/reduce:
//! every worker accumulates into a thread-local [`TrialStats`] and the
//! partials merge at the end, keeping the hot path lock-free.

use crate::error::ConfigError;
use crate::game::{GameConfig, GameOutcome, GameState, RngPolicy};
use rayon::prelude::*;

/// Aggregated statistics over a batch of games.
#[derive(Debug, Clone, Default)]
pub struct TrialStats {
    /// Games that ran to completion.
    pub games_played: u64,
    /// Win count per player id.
    pub wins: Vec<u64>,
    total_turns: u64,
    total_sellout_laps: u64,
    sellout_games: u64,
}

impl TrialStats {
    /// Create empty stats for a game of `players` players.
    #[must_use]
    pub fn new(players: usize) -> Self {
        Self {
            games_played: 0,
            wins: vec![0; players],
            total_turns: 0,
            total_sellout_laps: 0,
            sellout_games: 0,
        }
    }

    /// Record one finished game.
    pub fn record(&mut self, outcome: &GameOutcome) {
        self.games_played += 1;
        self.total_turns += u64::from(outcome.turns);

        let idx = usize::from(outcome.winner);
        if idx < self.wins.len() {
            self.wins[idx] += 1;
        }

        if outcome.sellout_laps >= 0 {
            self.sellout_games += 1;
            self.total_sellout_laps += outcome.sellout_laps as u64;
        }
    }

    /// Merge another accumulator into this one.
    pub fn merge(&mut self, other: &TrialStats) {
        self.games_played += other.games_played;
        self.total_turns += other.total_turns;
        self.total_sellout_laps += other.total_sellout_laps;
        self.sellout_games += other.sellout_games;
        if self.wins.len() < other.wins.len() {
            self.wins.resize(other.wins.len(), 0);
        }
        for (mine, theirs) in self.wins.iter_mut().zip(&other.wins) {
            *mine += theirs;
        }
    }

    /// Mean turns until a single player remained.
    #[must_use]
    pub fn mean_turns(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.total_turns as f64 / self.games_played as f64
    }

    /// Mean laps around the board before the 28th purchase, over the
    /// games that reached a sellout.
    #[must_use]
    pub fn mean_sellout_laps(&self) -> f64 {
        if self.sellout_games == 0 {
            return 0.0;
        }
        self.total_sellout_laps as f64 / self.sellout_games as f64
    }

    /// Fraction of games in which every purchasable tile sold.
    #[must_use]
    pub fn sellout_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.sellout_games as f64 / self.games_played as f64
    }

    /// Win rate for a player (0.0-1.0).
    #[must_use]
    pub fn win_rate(&self, player: usize) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.wins.get(player).copied().unwrap_or(0) as f64 / self.games_played as f64
    }
}

/// Run `games` independent games in parallel and aggregate their outcomes.
///
/// Game `i` is seeded with `base_seed + i`, so a batch is reproducible
/// from its base seed regardless of worker scheduling.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the game configuration is invalid.
pub fn run_trials(
    games: u64,
    base_seed: u64,
    config: &GameConfig,
) -> Result<TrialStats, ConfigError> {
    config.validate()?;
    let players = config.players;

    let stats = (0..games)
        .into_par_iter()
        .fold(
            || TrialStats::new(players),
            |mut local, i| {
                let seed = base_seed.wrapping_add(i);
                let mut policy = RngPolicy::new(seed);
                if let Ok(mut game) = GameState::new(*config) {
                    let outcome = game.play(&mut policy);
                    local.record(&outcome);
                }
                local
            },
        )
        .reduce(
            || TrialStats::new(players),
            |mut a, b| {
                a.merge(&b);
                a
            },
        );

    Ok(stats)
}
