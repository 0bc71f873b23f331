//! Error types for Studio Form

use thiserror::Error;

/// Errors raised while validating component configuration.
///
/// Components never surface these to the page; they log and fall back to
/// defaults. The typed errors exist so callers constructing configuration
/// up front can reject bad values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Section identifier was an empty string
    #[error("Section identifier must not be empty")]
    EmptyIdentifier,

    /// Section identifier cannot be used as a DOM anchor
    #[error("Invalid section identifier: {0:?}")]
    InvalidIdentifier(String),

    /// Viewport fraction outside [0, 1]
    #[error("Viewport amount out of range: {0}")]
    AmountOutOfRange(f64),

    /// Tone name not recognised
    #[error("Unknown tone: {0}")]
    UnknownTone(String),
}

/// Result type alias for Studio Form operations
pub type Result<T> = std::result::Result<T, LayoutError>;
