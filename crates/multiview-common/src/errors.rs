use std::path::PathBuf;

use crate::types::Platform;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("state parameter is empty")]
    Empty,

    #[error("state is not valid base64: {0}")]
    Base64(String),

    #[error("state is not valid json: {0}")]
    Json(String),

    #[error("state version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },

    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage key is invalid: {0}")]
    InvalidKey(String),

    #[error("storage read failed: {0}")]
    Read(String),

    #[error("storage write failed: {0}")]
    Write(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("remote control is not supported for {0}")]
    Unsupported(Platform),

    #[error("no player registered for {0}")]
    NotRegistered(String),

    #[error("player handle failed: {0}")]
    Handle(String),

    #[error("message delivery failed: {0}")]
    Sink(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("schedule source error: {0}")]
    Source(String),

    #[error("schedule parse error: {0}")]
    Parse(String),
}

#[derive(Debug, thiserror::Error)]
pub enum MultiviewError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Player(#[from] PlayerError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
