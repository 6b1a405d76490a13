//! Error types shared across the game

use thiserror::Error;

use crate::resources::ResourceError;

/// Anything that can stop the game from starting or switching scenes
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Resource(#[from] ResourceError),
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
