//! Error types for player initialization.
//!
//! Playback, fullscreen and keyboard operations never fail; they degrade to
//! no-ops. Errors only come out of configuration parsing and DOM wiring.

use thiserror::Error;

/// Result type for player operations.
pub type PlayerResult<T> = Result<T, PlayerError>;

/// Errors that can occur while setting up a player.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Configuration value out of range or empty.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Browser glue failed (missing window, element creation, insertion).
    #[error("DOM error: {0}")]
    Dom(String),
}
