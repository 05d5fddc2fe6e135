use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to open {path}: {source}")]
    ImageOpen {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Failed to save {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Failed to create image buffer of {width}x{height}")]
    ImageBuffer { width: usize, height: usize },
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
    #[error("JSON error for {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid offset {0:?}: expected an integer or a symbol")]
    InvalidOffset(String),
    #[error("{0}")]
    Usage(String),
    #[error("Invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: usize, height: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
