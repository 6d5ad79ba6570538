//! Touch routing: a tap right of the screen's vertical midline fires a
//! missile, anywhere else thrusts.

use std::sync::mpsc;

use spacewar_core::commands::InputAction;
use spacewar_sim::input::InputQueue;

use crate::error::AppError;
use crate::state::GameLoopCommand;

/// What a tap turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchAction {
    Fire,
    Thrust,
}

pub struct TouchRouter {
    midline: f64,
    input: InputQueue,
    commands: mpsc::Sender<GameLoopCommand>,
}

impl TouchRouter {
    /// Router for a scene `scene_width` points wide.
    pub fn new(
        scene_width: f64,
        input: InputQueue,
        commands: mpsc::Sender<GameLoopCommand>,
    ) -> Self {
        Self {
            midline: scene_width / 2.0,
            input,
            commands,
        }
    }

    /// A tap exactly on the midline thrusts.
    pub fn classify(&self, x: f64) -> TouchAction {
        if x > self.midline {
            TouchAction::Fire
        } else {
            TouchAction::Thrust
        }
    }

    /// Dispatch a tap at horizontal position `x`.
    pub fn route(&self, x: f64) -> Result<TouchAction, AppError> {
        let action = self.classify(x);
        match action {
            TouchAction::Fire => self.input.push(InputAction::FireMissile),
            TouchAction::Thrust => self
                .commands
                .send(GameLoopCommand::Thrust)
                .map_err(|_| AppError::NotRunning)?,
        }
        Ok(action)
    }
}
