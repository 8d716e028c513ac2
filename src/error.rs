use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersonaError {
    #[error("Invalid Reddit URL or username: {0}")]
    Identifier(String),

    #[error("Data source unavailable: {0}")]
    DataSourceUnavailable(String),

    #[error("Reddit user '{0}' not found or account is suspended")]
    UserNotFound(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Failed to create output directory {0}: {1}")]
    Directory(String, String),

    #[error("Failed to write persona file {0}: {1}")]
    Write(String, String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PersonaResult<T> = Result<T, PersonaError>;
