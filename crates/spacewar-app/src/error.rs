use spacewar_core::error::SimError;

use crate::config::ConfigError;

/// Errors surfaced by the driver.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("simulation error: {0}")]
    Sim(#[from] SimError),

    #[error("simulation already running")]
    AlreadyRunning,

    #[error("game loop not running")]
    NotRunning,

    #[error("game loop thread panicked")]
    LoopPanicked,
}
