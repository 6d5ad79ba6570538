//! Driver state shared between the input side and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use spacewar_core::state::WorldSnapshot;
use spacewar_sim::input::SharedTilt;

use crate::touch::TouchRouter;

/// Commands sent from the input side to the game loop thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameLoopCommand {
    /// Push the player ship forward on the next tick.
    Thrust,
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot cell written by the game loop.
pub type SnapshotCell = Arc<Mutex<Option<WorldSnapshot>>>;

/// Shared driver state.
///
/// Everything that only exists while the loop runs sits behind
/// `Mutex<Option<...>>`.
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Routes taps to the input queue or the command channel.
    pub router: Mutex<Option<TouchRouter>>,
    /// Latest tilt reading, read by the engine once per tick.
    pub tilt: SharedTilt,
    /// Latest snapshot, updated by the game loop thread after each tick.
    pub latest_snapshot: SnapshotCell,
    pub loop_thread: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            router: Mutex::new(None),
            tilt: SharedTilt::new(),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_thread: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
