use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Corrupt cache entry for {hash}: {reason}")]
    CorruptCacheEntry { hash: String, reason: String },
}

pub type CfResult<T> = Result<T, CipherForgeError>;
