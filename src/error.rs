//! Error types for the QR encoding and geometry rendering pipeline.

use thiserror::Error;

/// Errors produced by encoding, matrix construction, and rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A configuration value was out of range or otherwise invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// The payload is too large to fit in any supported QR version.
    #[error("encoding too large for any supported QR version")]
    EncodingTooLarge,

    /// The input grid or payload was empty.
    #[error("empty input")]
    EmptyInput,
}

/// Convenience alias for results returned throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
