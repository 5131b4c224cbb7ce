//! Output formatting utilities for CLI.

use boardwalk::trial::TrialStats;
use boardwalk::{GameConfig, GameOutcome, GameState, PlayerId};
use serde::Serialize;

/// JSON-serializable game result.
#[derive(Debug, Serialize)]
pub(super) struct JsonGameOutcome {
    /// Random seed used.
    pub(super) seed: u64,
    /// Winner player id.
    pub(super) winner: PlayerId,
    /// Total turns played.
    pub(super) turns: u32,
    /// Lap count when the board sold out (null if it never did).
    pub(super) sellout_laps: Option<i32>,
    /// Per-player results.
    pub(super) players: Vec<JsonPlayerOutcome>,
}

/// JSON-serializable player result.
#[derive(Debug, Serialize)]
pub(super) struct JsonPlayerOutcome {
    /// Player id.
    pub(super) id: PlayerId,
    /// Final cash.
    pub(super) cash: i64,
    /// Tiles owned at the end.
    pub(super) tiles_owned: usize,
    /// Whether the player went bankrupt.
    pub(super) eliminated: bool,
}

impl JsonGameOutcome {
    /// Create from a finished game.
    pub(super) fn from_game(game: &GameState, outcome: &GameOutcome, seed: u64) -> Self {
        Self {
            seed,
            winner: outcome.winner,
            turns: outcome.turns,
            sellout_laps: (outcome.sellout_laps >= 0).then_some(outcome.sellout_laps),
            players: game
                .players
                .iter()
                .map(|p| JsonPlayerOutcome {
                    id: p.id,
                    cash: p.cash,
                    tiles_owned: p.owned.len(),
                    eliminated: p.eliminated,
                })
                .collect(),
        }
    }
}

/// Format a finished game as human-readable text.
pub(super) fn format_game_text(game: &GameState, outcome: &GameOutcome, seed: u64) -> String {
    let mut output = String::new();

    output.push_str(&format!("Game Result (seed: {seed})\n"));
    output.push_str(&format!("  Winner: Player {}\n", outcome.winner));
    output.push_str(&format!("  Turns: {}\n", outcome.turns));
    if outcome.sellout_laps >= 0 {
        output.push_str(&format!(
            "  Board sold out after {} laps\n",
            outcome.sellout_laps
        ));
    } else {
        output.push_str("  Board never sold out\n");
    }
    output.push('\n');

    for player in &game.players {
        output.push_str(&format!(
            "  Player {}: ${} with {} tiles",
            player.id,
            player.cash,
            player.owned.len()
        ));
        if player.eliminated {
            output.push_str(" [bankrupt]");
        }
        output.push('\n');
    }

    output
}

/// JSON-serializable simulation summary.
#[derive(Debug, Serialize)]
pub(super) struct JsonTrialStats {
    /// Games run.
    games_played: u64,
    /// Base seed of the batch.
    base_seed: u64,
    /// Whether house rules were active.
    house_rules: bool,
    /// Mean turns per game.
    mean_turns: f64,
    /// Mean laps until the board sold out (sellout games only).
    mean_sellout_laps: f64,
    /// Fraction of games in which the board sold out.
    sellout_rate: f64,
    /// Per-player win statistics.
    players: Vec<JsonTrialPlayer>,
}

/// JSON-serializable per-player simulation stats.
#[derive(Debug, Serialize)]
struct JsonTrialPlayer {
    /// Player id.
    player: usize,
    /// Number of wins.
    wins: u64,
    /// Win rate (0.0-1.0).
    win_rate: f64,
}

impl JsonTrialStats {
    /// Create from aggregated stats.
    pub(super) fn from_stats(stats: &TrialStats, config: &GameConfig, base_seed: u64) -> Self {
        let players = (0..config.players)
            .map(|i| JsonTrialPlayer {
                player: i,
                wins: stats.wins.get(i).copied().unwrap_or(0),
                win_rate: stats.win_rate(i),
            })
            .collect();

        Self {
            games_played: stats.games_played,
            base_seed,
            house_rules: config.house_rules,
            mean_turns: stats.mean_turns(),
            mean_sellout_laps: stats.mean_sellout_laps(),
            sellout_rate: stats.sellout_rate(),
            players,
        }
    }
}

/// Format simulation stats as human-readable text.
pub(super) fn format_stats_text(stats: &TrialStats, config: &GameConfig) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Simulation Results ({} games, house rules {})\n",
        stats.games_played,
        if config.house_rules { "ON" } else { "OFF" }
    ));
    output.push_str("========================================\n\n");

    output.push_str("Win Rates:\n");
    for (i, wins) in stats.wins.iter().enumerate() {
        output.push_str(&format!(
            "  Player {}: {:.1}% ({} wins)\n",
            i,
            stats.win_rate(i) * 100.0,
            wins
        ));
    }

    output.push_str(&format!(
        "\nAverage Game Length: {:.1} turns\n",
        stats.mean_turns()
    ));
    output.push_str(&format!(
        "Average Laps to Sellout: {:.1} ({:.1}% of games sold out)\n",
        stats.mean_sellout_laps(),
        stats.sellout_rate() * 100.0
    ));

    output
}

/// Format simulation stats as CSV.
pub(super) fn format_stats_csv(stats: &TrialStats) -> String {
    let mut output = String::new();

    // Header
    output.push_str("player,wins,win_rate\n");

    // Data rows
    for (i, wins) in stats.wins.iter().enumerate() {
        output.push_str(&format!("{},{},{:.4}\n", i, wins, stats.win_rate(i)));
    }

    output
}
