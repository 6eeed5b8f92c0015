use thiserror::Error;

/// Invalid `data-gallery-*` override on the container element.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown config attribute `{0}`")]
    UnknownKey(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Error, PartialEq)]
pub enum GalleryError {
    #[error("expected {expected} rects, got {got}")]
    RectCountMismatch { expected: usize, got: usize },
    #[error("image `{0}` cannot be used as a texture source")]
    TextureUnavailable(String),
}
