//! Session control: the operations a front end calls.
//!
//! They bridge input events to the game loop thread via channels and the
//! shared input queue.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::info;

use spacewar_core::state::WorldSnapshot;
use spacewar_sim::config::SimConfig;
use spacewar_sim::input::TiltSample;
use spacewar_sim::SimulationEngine;

use crate::error::AppError;
use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};
use crate::touch::{TouchAction, TouchRouter};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Start the simulation. Fails if it is already running or `config` is
/// invalid.
pub fn start_simulation(state: &AppState, config: SimConfig) -> Result<(), AppError> {
    let mut tx_lock = lock(&state.command_tx);
    if tx_lock.is_some() {
        return Err(AppError::AlreadyRunning);
    }

    let scene_width = config.scene_width;
    let engine = SimulationEngine::new(config, Box::new(state.tilt.clone()))?;
    let input = engine.input_queue();
    let (cmd_tx, handle) = game_loop::spawn_game_loop(engine, state.latest_snapshot.clone());

    *lock(&state.router) = Some(TouchRouter::new(scene_width, input, cmd_tx.clone()));
    *lock(&state.loop_thread) = Some(handle);
    *tx_lock = Some(cmd_tx);

    info!(scene_width, "simulation started");
    Ok(())
}

/// A tap at horizontal position `x`.
pub fn tap(state: &AppState, x: f64) -> Result<TouchAction, AppError> {
    lock(&state.router)
        .as_ref()
        .ok_or(AppError::NotRunning)?
        .route(x)
}

/// Record a tilt reading. Accepted whether or not the loop runs; the
/// engine only ever sees the most recent one.
pub fn tilt(state: &AppState, sample: TiltSample) {
    state.tilt.set(sample);
}

/// Latest snapshot, if the loop has produced one.
pub fn get_snapshot(state: &AppState) -> Option<WorldSnapshot> {
    lock(&state.latest_snapshot).clone()
}

/// Stop the game loop and wait for its thread to finish.
pub fn stop_simulation(state: &AppState) -> Result<(), AppError> {
    let cmd_tx = lock(&state.command_tx).take().ok_or(AppError::NotRunning)?;
    *lock(&state.router) = None;
    // A loop that already exited has dropped its receiver.
    let _ = cmd_tx.send(GameLoopCommand::Shutdown);

    let handle = lock(&state.loop_thread).take();
    if let Some(handle) = handle {
        handle.join().map_err(|_| AppError::LoopPanicked)?;
    }
    info!("simulation stopped");
    Ok(())
}
