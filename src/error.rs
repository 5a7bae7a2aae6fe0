use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Host dispatch error: {0}")]
    Host(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
