use std::path::PathBuf;

use thiserror::Error;

use crate::io::feed::FeedError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("config value out of range: {0}")]
    ConfigValue(String),

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
