//! Error types for PORTFOLIOTERM.

use std::io;

/// Errors produced by the PORTFOLIOTERM crates.
///
/// An unrecognized command is not an error at this level: the session
/// reports it in the transcript and carries on.
#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    #[error("config error: {0}")]
    Config(String),

    #[error("content error: {0}")]
    Content(String),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, PortfolioError>;
