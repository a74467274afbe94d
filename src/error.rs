use thiserror::Error;

#[derive(Error, Debug)]
pub enum DopError {
    #[error("Invalid date: {0}")]
    DateParse(#[from] chrono::ParseError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, DopError>;
