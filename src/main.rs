//! Starfall headless runner
//!
//! Plays a session under the demo autopilot and logs the HUD. Usage:
//!
//! ```text
//! starfall [settings.json]
//! ```
//!
//! Set `RUST_LOG=info` (or `debug`) to see output.

use starfall::audio::LogAudio;
use starfall::consts::TICKS_PER_SECOND;
use starfall::hud::LogPresenter;
use starfall::sim::demo_input;
use starfall::{Session, Settings};

/// Stop after ten minutes of simulated play
const MAX_TICKS: u64 = TICKS_PER_SECOND as u64 * 600;

fn main() {
    env_logger::init();
    log::info!("Starfall (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(&path).unwrap_or_else(|e| {
            log::warn!("Failed to load settings from {path}: {e}, using defaults");
            Settings::default()
        }),
        None => Settings::default(),
    };

    let mut session = Session::from_settings(&settings, LogAudio::default(), LogPresenter::default());
    session.start();

    let mut ticks = 0;
    while ticks < MAX_TICKS {
        let input = demo_input(session.state());
        if !session.advance(&input) {
            break;
        }
        ticks += 1;
    }

    let hud = session.hud();
    if session.is_game_over() {
        log::info!("Destroyed after {} ticks", hud.frame);
    } else {
        log::info!("Survived {} ticks", hud.frame);
    }
    log::info!(
        "Final score {} | hp {}/{} | {} sounds played",
        hud.score,
        hud.hp,
        hud.max_hp,
        session.audio().played
    );
}
