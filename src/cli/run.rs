//! Run command implementation: one game, full outcome.

use super::output::{format_game_text, JsonGameOutcome};
use super::{seed_or_time, CliError, OutputFormat};
use boardwalk::{GameConfig, GameState, RngPolicy};

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the configuration is rejected or output fails.
pub(crate) fn execute(
    config: &GameConfig,
    seed: Option<u64>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let seed = seed_or_time(seed);

    let mut game = GameState::new(*config)?;
    let mut policy = RngPolicy::new(seed);
    let outcome = game.play(&mut policy);

    match format {
        OutputFormat::Text => {
            print!("{}", format_game_text(&game, &outcome, seed));
        }
        OutputFormat::Json => {
            let json_result = JsonGameOutcome::from_game(&game, &outcome, seed);
            let json = serde_json::to_string_pretty(&json_result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}
