#![forbid(unsafe_code)]

//! Top-level error type.

use marquee_widgets::carousel::CarouselError;

/// Top-level error type for Marquee hosts.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading a config file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A TOML document did not parse.
    #[cfg(feature = "config")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// A JSON document did not parse.
    #[cfg(feature = "config")]
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// The configuration parsed but failed validation.
    #[error("invalid configuration: {}", .0.join("; "))]
    Validation(Vec<String>),
    /// A carousel could not be constructed.
    #[error(transparent)]
    Carousel(#[from] CarouselError),
}

/// Standard result type for Marquee APIs.
pub type Result<T> = std::result::Result<T, Error>;
