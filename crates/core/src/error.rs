use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum FlameError {
    #[error("config error: {0}")]
    Config(String),

    #[error("unknown route: {0:?}")]
    UnknownRoute(String),
}

pub type Result<T, E = FlameError> = std::result::Result<T, E>;
