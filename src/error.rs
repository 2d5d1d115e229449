use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CarouselError {
    #[error("a carousel needs at least one slide")]
    NoSlides,

    #[error("autoplay interval must be greater than zero")]
    ZeroInterval,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no image files found in directory {0:?}")]
    NoImages(PathBuf),

    #[error("failed to read file {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("failed to create texture for {path:?}: {reason}")]
    Texture { path: PathBuf, reason: String },
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid autoplay interval {0}: expected a positive number of seconds")]
    InvalidInterval(f32),
}
