use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Precondition violation: {0}")]
    PreconditionViolation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Replay error: {0}")]
    Replay(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config format error: {0}")]
    ConfigFormat(#[from] serde_yaml::Error),
}
