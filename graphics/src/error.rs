//! Graphics error types.
//!
//! Binding, clearing, camera upload and full-screen draws are infallible:
//! failures of the underlying command API are not caught here. Only the
//! checked entry points report errors.

use std::fmt;

/// Errors reported by the checked entry points of the graphics crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphicsError {
    /// An invalid parameter was provided.
    InvalidParameter(String),
}

impl fmt::Display for GraphicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
        }
    }
}

impl std::error::Error for GraphicsError {}
