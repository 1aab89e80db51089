//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::fmt;
use thiserror::Error;

/// Why a trace line could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// No comma separating the address part from the size
    MissingComma,

    /// Nothing before the comma
    EmptyAccess,

    /// Address token is not base-16
    InvalidAddress(String),

    /// Size token is not base-10 or does not fit in a byte
    InvalidSize(String),
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingComma => write!(f, "missing ',' before access size"),
            Self::EmptyAccess => write!(f, "no access type or address before ','"),
            Self::InvalidAddress(token) => write!(f, "invalid hexadecimal address '{}'", token),
            Self::InvalidSize(token) => write!(f, "invalid access size '{}'", token),
        }
    }
}

/// A trace line that is neither a comment nor a well-formed access
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed trace line {line_number}: {reason}: {content:?}")]
pub struct MalformedLineError {
    /// 1-based position of the line in the input
    pub line_number: usize,

    /// The offending line, without its line terminator
    pub content: String,

    pub reason: MalformedReason,
}

impl MalformedLineError {
    pub fn new(line_number: usize, content: &str, reason: MalformedReason) -> Self {
        Self {
            line_number,
            content: content.to_string(),
            reason,
        }
    }
}

/// Errors that can occur while converting a trace
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    MalformedLine(#[from] MalformedLineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while decoding a binary trace
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("truncated record at byte offset {offset}: only {len} of 16 bytes present")]
    Truncated { offset: u64, len: usize },

    #[error("unknown access kind {kind} in record at byte offset {offset}")]
    UnknownKind { offset: u64, kind: u8 },

    #[error("non-zero padding in record at byte offset {offset}")]
    NonZeroPadding { offset: u64 },
}
