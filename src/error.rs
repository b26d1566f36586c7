// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between the wiki and the chart.
#[derive(Debug, Error)]
pub enum Error {
    /// Network failure or a non-success HTTP status.
    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The page (or a stored file) did not have the expected structure.
    #[error("parse error: {0}")]
    Parse(String),

    /// Header names and data columns disagree.
    #[error("shape mismatch: expected {expected} columns, found {found}")]
    ShapeMismatch { expected: usize, found: usize },

    #[error("missing column '{0}'")]
    MissingColumn(String),

    #[error("unknown stored file '{0}'")]
    UnknownFile(String),

    #[error("config error in {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn fetch(url: impl Into<String>, reason: impl ToString) -> Self {
        Error::Fetch { url: url.into(), reason: reason.to_string() }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }
}
