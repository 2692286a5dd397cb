//! Error types for kit generation

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for kit operations
pub type Result<T> = std::result::Result<T, KitError>;

/// Everything that can stop a kit run. None of these are retried.
#[derive(Error, Debug)]
pub enum KitError {
    /// Directory creation, file write or directory listing failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// PNG encoding failed
    #[error("Failed to write image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Zip assembly failed
    #[error("Failed to build archive {path}: {source}")]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl KitError {
    pub(crate) fn io(path: &Path) -> impl FnOnce(std::io::Error) -> KitError + '_ {
        move |source| KitError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn image(path: &Path) -> impl FnOnce(image::ImageError) -> KitError + '_ {
        move |source| KitError::Image {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn archive(path: &Path) -> impl FnOnce(zip::result::ZipError) -> KitError + '_ {
        move |source| KitError::Archive {
            path: path.to_path_buf(),
            source,
        }
    }
}
