use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid hash format")]
    InvalidHash,
    #[error("hash mismatch for {0}")]
    HashMismatch(String),
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;
