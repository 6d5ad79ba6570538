//! Headless SPACEWAR session.
//!
//! Starts the game loop, plays a short scripted sequence of taps and tilt
//! readings against it, logs what the simulation reports, and shuts down.

use std::process::ExitCode;
use std::time::Duration;

use tracing::{error, info};

use spacewar_app::config::load_config;
use spacewar_app::error::AppError;
use spacewar_app::session;
use spacewar_app::state::AppState;
use spacewar_core::enums::Category;
use spacewar_sim::input::TiltSample;

/// One step of the demo script.
#[derive(Debug, Clone, Copy)]
enum DemoInput {
    /// Tap at a fraction of the scene width.
    Tap(f64),
    Tilt(f64),
    Wait(u64),
}

const DEMO: &[DemoInput] = &[
    DemoInput::Wait(250),
    DemoInput::Tap(0.25),
    DemoInput::Wait(100),
    DemoInput::Tap(0.25),
    DemoInput::Wait(400),
    DemoInput::Tap(0.9),
    DemoInput::Wait(300),
    DemoInput::Tilt(0.6),
    DemoInput::Wait(500),
    DemoInput::Tilt(0.0),
    DemoInput::Tap(0.75),
    DemoInput::Tap(0.75),
    DemoInput::Wait(200),
    DemoInput::Tilt(-0.4),
    DemoInput::Wait(400),
    DemoInput::Tilt(0.05),
    DemoInput::Tap(0.1),
    DemoInput::Wait(1500),
];

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn run() -> Result<(), AppError> {
    let config = load_config()?;
    let scene_width = config.scene_width;
    let state = AppState::new();
    session::start_simulation(&state, config)?;

    for step in DEMO {
        match *step {
            DemoInput::Tap(fraction) => {
                let action = session::tap(&state, fraction * scene_width)?;
                info!(?action, "tap");
            }
            DemoInput::Tilt(y) => session::tilt(&state, TiltSample { x: 0.0, y }),
            DemoInput::Wait(millis) => {
                std::thread::sleep(Duration::from_millis(millis));
                report(&state);
            }
        }
    }

    session::stop_simulation(&state)
}

fn report(state: &AppState) {
    let Some(snapshot) = session::get_snapshot(state) else {
        return;
    };
    let missiles = snapshot
        .bodies
        .iter()
        .filter(|body| body.category == Category::Missile)
        .count();
    let player = snapshot
        .player
        .and_then(|id| snapshot.bodies.iter().find(|body| body.id == id));
    match player {
        Some(ship) => info!(
            tick = snapshot.time.tick,
            missiles,
            x = ship.position.0.x,
            y = ship.position.0.y,
            rotation = ship.rotation.0,
            "player ship"
        ),
        None => info!(tick = snapshot.time.tick, missiles, "no player ship"),
    }
}

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "session failed");
            ExitCode::FAILURE
        }
    }
}
