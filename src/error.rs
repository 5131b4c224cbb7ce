//! Error types for game configuration.
//!
//! Configuration is the only input validated eagerly. Everything else that
//! can go wrong during play (bankruptcy, auctions with no bidder) is a
//! game-domain outcome, not an error.

use std::fmt;

/// Rejected game configuration, reported at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Fewer than two players requested.
    TooFewPlayers(usize),
    /// More players requested than a `PlayerId` can index.
    TooManyPlayers(usize),
    /// Inflation period of zero would never accrue (and gates on a modulo).
    ZeroInflationPeriod,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::TooFewPlayers(n) => {
                write!(f, "too few players: {n} (minimum 2)")
            }
            ConfigError::TooManyPlayers(n) => {
                write!(f, "too many players: {n} (maximum 256)")
            }
            ConfigError::ZeroInflationPeriod => {
                write!(f, "inflation period must be at least 1 turn")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
