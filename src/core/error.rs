

use thiserror::Error;


#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Knowledge corpus is empty: {0}")]
    EmptyCorpus(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Index error: {0}")]
    Index(String),
}


pub type Result<T> = std::result::Result<T, ChatError>;
