#![deny(
    unused_import_braces,
    unused_lifetimes,
    unreachable_pub,
    trivial_numeric_casts,
    missing_debug_implementations,
    missing_copy_implementations,
    deprecated_in_future,
    meta_variable_misuse,
    non_ascii_idents,
    rust_2018_compatibility,
    rust_2018_idioms,
    future_incompatible,
    nonstandard_style,
    clippy::all
)]
#![warn(variant_size_differences, let_underscore_drop)]

//! # oxo
//!
//! Noughts and Crosses on the terminal, against a computer that never loses.

pub mod cli_options;
pub mod config;
pub mod game;
pub mod logger;
pub mod setup;

use crate::{
    cli_options::CliOptions,
    config::Config,
    game::Game,
};
use anyhow::Context as _;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

/// Data from the setup function
struct SetupData {
    config: Config,
    cli_options: CliOptions,
    worker_guard: Option<WorkerGuard>,
}

/// Pre-main setup
fn setup(cli_options: CliOptions) -> anyhow::Result<SetupData> {
    let config = setup::load_config(&cli_options.config).context("failed to load config")?;

    let worker_guard = logger::setup(&config).context("failed to initialize logger")?;

    Ok(SetupData {
        config,
        cli_options,
        worker_guard,
    })
}

/// The main entry.
///
/// Sets up the program and calls `real_main`.
/// This allows more things to drop correctly.
/// Config errors are printed to the stderr directly, as the logger is not initialized yet.
fn main() -> anyhow::Result<()> {
    // This line MUST run first.
    // It is needed to exit early if the options are invalid,
    // and this will NOT run destructors if it does so.
    let cli_options = argh::from_env();

    let setup_data = setup(cli_options)?;
    real_main(setup_data)?;
    Ok(())
}

/// The actual entry point
fn real_main(setup_data: SetupData) -> anyhow::Result<()> {
    let SetupData {
        config,
        cli_options,
        worker_guard,
    } = setup_data;

    let human = match cli_options.play_as {
        Some(symbol) => symbol,
        None => config.human().context("invalid human symbol")?,
    };
    let board = cli_options.board.unwrap_or_default();
    let show_scores = cli_options.show_scores || config.show_scores();

    info!(%human, computer = %human.other(), turn = %board.turn(), "starting game");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let outcome = Game::new(stdin.lock(), stdout.lock(), board, human)
        .show_scores(show_scores)
        .play()
        .context("failed to play game")?;

    info!(?outcome, "game over");

    // Logging no longer reliable past this point
    drop(worker_guard);

    Ok(())
}
