//! Input channels into the simulation.
//!
//! Two shapes of input reach the core:
//! - discrete actions, pushed onto an [`InputQueue`] from any thread and
//!   drained all at once at the start of each tick;
//! - a continuous tilt reading, read through a [`TiltSource`] that only
//!   ever exposes the most recent sample.

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use spacewar_core::commands::InputAction;

/// FIFO of pending actions shared between the input side and the engine.
///
/// Cloning yields another handle to the same queue.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: Arc<Mutex<Vec<InputAction>>>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action for the next tick.
    pub fn push(&self, action: InputAction) {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(action);
    }

    /// Take every pending action, oldest first, leaving the queue empty.
    ///
    /// The swap happens under the lock, so a concurrent push lands either
    /// in this batch or the next one.
    pub fn drain(&self) -> Vec<InputAction> {
        std::mem::take(&mut *self.pending.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn len(&self) -> usize {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One accelerometer reading. The control axis is `y`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TiltSample {
    pub x: f64,
    pub y: f64,
}

/// Provider of the latest tilt reading.
pub trait TiltSource: Send {
    /// Most recent sample, or `None` if no reading has arrived yet.
    fn latest(&self) -> Option<TiltSample>;
}

/// Tilt source that never reports a sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTilt;

impl TiltSource for NoTilt {
    fn latest(&self) -> Option<TiltSample> {
        None
    }
}

/// Latest-sample cell written by a sensor thread and read by the engine.
#[derive(Debug, Clone, Default)]
pub struct SharedTilt {
    sample: Arc<Mutex<Option<TiltSample>>>,
}

impl SharedTilt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current sample.
    pub fn set(&self, sample: TiltSample) {
        *self.sample.lock().unwrap_or_else(PoisonError::into_inner) = Some(sample);
    }

    /// Forget the current sample.
    pub fn clear(&self) {
        *self.sample.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl TiltSource for SharedTilt {
    fn latest(&self) -> Option<TiltSample> {
        *self.sample.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
