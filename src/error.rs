use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeqForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Invalid Sequence: {0}")]
    InvalidSequence(String),
}

pub type SfResult<T> = Result<T, SeqForgeError>;
