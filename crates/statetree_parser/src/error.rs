//! Parse error types.

use thiserror::Error;

/// Errors a [`Parser`](crate::Parser) can report.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The source text is not a valid machine file.
    #[error("Invalid source{}: {message}", at_offset(.offset))]
    InvalidSource {
        message: String,
        /// Byte offset of the offending input, when known.
        offset: Option<u32>,
    },

    /// The source uses a construct the parser does not handle.
    #[error("Unsupported construct: {0}")]
    Unsupported(String),

    #[error("Internal parser error: {0}")]
    Internal(String),
}

fn at_offset(offset: &Option<u32>) -> String {
    match offset {
        Some(offset) => format!(" at byte {}", offset),
        None => String::new(),
    }
}

impl ParseError {
    pub fn invalid_source(message: impl Into<String>) -> Self {
        Self::InvalidSource {
            message: message.into(),
            offset: None,
        }
    }

    /// Creates an invalid source error pointing at a byte offset.
    pub fn invalid_source_at(message: impl Into<String>, offset: u32) -> Self {
        Self::InvalidSource {
            message: message.into(),
            offset: Some(offset),
        }
    }

    pub fn unsupported(construct: impl Into<String>) -> Self {
        Self::Unsupported(construct.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns the byte offset the error points at, if any.
    pub fn offset(&self) -> Option<u32> {
        match self {
            Self::InvalidSource { offset, .. } => *offset,
            Self::Unsupported(_) | Self::Internal(_) => None,
        }
    }
}
