//! Error types for content loading.

use thiserror::Error;

/// Errors raised while loading or checking a content table.
///
/// All of these are load-time defects: the application refuses to start on a
/// broken table rather than rendering partial content.
#[derive(Error, Debug)]
pub enum ContentError {
    /// Content file could not be read from disk
    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),

    /// Content file is not valid TOML for the expected schema
    #[error("failed to parse content table: {0}")]
    Parse(#[from] toml::de::Error),

    /// Table parsed but failed a structural check
    #[error("invalid content table: {0}")]
    Validation(String),
}
