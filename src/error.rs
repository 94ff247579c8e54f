//! Centralized error types for the platform layer.
//!
//! The simulation itself cannot fail; these errors only come from SDL setup, drawing and logging initialization.

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("SDL error: {0}")]
    Sdl(String),
}

/// Platform-specific errors.
#[derive(thiserror::Error, Debug)]
pub enum PlatformError {
    #[error("Logging initialization failed: {0}")]
    LoggingInit(String),
}

/// Errors raised while issuing draw calls.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Failed to fill rectangle: {0}")]
    FillFailed(String),

    #[error("Failed to draw text {text:?}: {reason}")]
    TextFailed { text: String, reason: String },

    #[error("Failed to change render scale: {0}")]
    ScaleFailed(String),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
