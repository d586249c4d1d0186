//! Error types for RefOS.
//!
//! Registry mutators are total functions and never fail; errors only arise
//! at the edges (catalog parsing, flag persistence).

use std::io;

/// Errors produced by the RefOS framework.
#[derive(Debug, thiserror::Error)]
pub enum RefosError {
    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("launch error: {0}")]
    Launch(String),

    #[error("flag store error: {0}")]
    Flags(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, RefosError>;
