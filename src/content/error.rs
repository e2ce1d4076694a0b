//! Errors raised while loading content

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse front-matter: {0}")]
    FrontMatter(#[from] serde_yaml::Error),

    #[error("Invalid date in front-matter: {0}")]
    InvalidDate(String),
}

impl ContentError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = ContentError> = std::result::Result<T, E>;
