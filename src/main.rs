//! Twin Pong entry point
//!
//! Loads settings, creates the backend and runs the game loop.

use std::process::ExitCode;

use twin_pong::pacer::SystemClock;
use twin_pong::sim::GameState;
use twin_pong::{Game, Pacer, Settings};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Twin Pong starting...");

    let settings = Settings::load();
    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("twin-pong: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn new_pacer(settings: &Settings) -> Pacer<SystemClock> {
    Pacer::with_timing(
        SystemClock::new(),
        settings.timing.frame_interval_ms,
        settings.timing.max_delta,
    )
}

#[cfg(feature = "sdl")]
fn run(settings: &Settings) -> Result<(), twin_pong::platform::PlatformError> {
    use twin_pong::platform::sdl;

    let (canvas, events) = sdl::init(&settings.window, &settings.arena)?;
    let state = GameState::new(settings.arena.clone(), &settings.balls);
    let mut game = Game::new(state, new_pacer(settings), canvas, events, settings.palette);
    game.run();
    log::info!("Shutting down");
    Ok(())
}

#[cfg(not(feature = "sdl"))]
fn run(settings: &Settings) -> Result<(), twin_pong::platform::PlatformError> {
    use twin_pong::platform::headless::{HeadlessCanvas, ScriptedInput};

    log::info!("No window backend (build with `--features sdl`); playing headless");
    let state = GameState::new(settings.arena.clone(), &settings.balls);
    let mut game = Game::new(
        state,
        new_pacer(settings),
        HeadlessCanvas::new(),
        ScriptedInput::new(),
        settings.palette,
    );
    let summary = game.run();
    println!(
        "{} frames, {} balls retired",
        summary.frames, summary.retired
    );
    Ok(())
}
