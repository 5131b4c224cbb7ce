//! Simulate command implementation: mass parallel games.

use super::output::{format_stats_csv, format_stats_text, JsonTrialStats};
use super::{seed_or_time, CliError, SimulateFormat};
use boardwalk::trial::run_trials;
use boardwalk::GameConfig;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

/// Execute the simulate command.
///
/// # Errors
///
/// Returns an error if the configuration is rejected or output fails.
pub(crate) fn execute(
    config: &GameConfig,
    games: u64,
    seed: Option<u64>,
    threads: Option<usize>,
    format: SimulateFormat,
    progress: bool,
) -> Result<(), CliError> {
    // Set thread pool size if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    let base_seed = seed_or_time(seed);

    // Progress bar position is set after the batch completes; the rayon
    // fold/reduce hot path stays free of atomics.
    let pb = if progress {
        let pb = ProgressBar::new(games);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} games ({per_sec})")
                .map_err(|e| CliError::new(format!("invalid progress template: {e}")))?
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();
    let stats = run_trials(games, base_seed, config)?;
    let duration = start.elapsed();

    if let Some(pb) = pb {
        pb.set_position(stats.games_played);
        pb.finish_with_message("done");
    }

    let games_per_sec = if duration.as_secs_f64() > 0.0 {
        stats.games_played as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    match format {
        SimulateFormat::Text => {
            println!();
            print!("{}", format_stats_text(&stats, config));
            println!();
            println!(
                "Duration: {:.2}s ({:.0} games/sec)",
                duration.as_secs_f64(),
                games_per_sec
            );
        }
        SimulateFormat::Json => {
            let json_result = JsonTrialStats::from_stats(&stats, config, base_seed);
            let json = serde_json::to_string_pretty(&json_result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
        SimulateFormat::Csv => {
            print!("{}", format_stats_csv(&stats));
        }
    }

    Ok(())
}
