/// Convenience result type used across gridreel.
pub type GridReelResult<T> = Result<T, GridReelError>;

/// Top-level error taxonomy used by renderer, assembler and pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum GridReelError {
    /// Invalid configuration or input that cannot be rendered.
    #[error("validation error: {0}")]
    Validation(String),

    /// An image file could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// The animation encoder rejected a frame or its settings.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GridReelError {
    /// Build a [`GridReelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GridReelError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`GridReelError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
