use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Document too short: expected a title and a separator line, found {lines} line(s)")]
    DocumentTooShort { lines: usize },

    #[error("IO error on {path:?}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to convert {path:?}: {source}")]
    Page {
        path: PathBuf,
        #[source]
        source: Box<ConvertError>,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
