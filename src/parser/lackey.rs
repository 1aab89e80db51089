//! Line parser for valgrind lackey output.
//!
//! Lackey (`valgrind --tool=lackey --trace-mem=yes`) writes one memory event
//! per line, e.g. `I  04a83f3c,4` or ` S 7fff0010,8`, interleaved with
//! valgrind's own `==pid==` diagnostics.

use super::access::AccessType;
use crate::utils::config::COMMENT_MARKER;
use crate::utils::error::{MalformedLineError, MalformedReason};
use log::trace;

/// A single memory event parsed from a trace line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryAccess {
    pub access_type: AccessType,
    pub address: u64,
    pub size: u8,
}

/// Classification of one trace line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceLine {
    /// Valgrind diagnostic line
    Comment,

    /// Access with a symbol that has no meaning to the converter
    Unrecognized,

    /// Parsed memory event
    Access(MemoryAccess),
}

/// Parse one line of a lackey trace
///
/// **Public** - main entry point for line parsing
///
/// # Arguments
/// * `line` - Line content without its terminator
/// * `line_number` - 1-based position, used for error reporting
///
/// # Errors
/// * `MalformedReason::MissingComma` - no `,` in a non-comment line
/// * `MalformedReason::EmptyAccess` - no tokens before the `,`
/// * `MalformedReason::InvalidAddress` - last token before `,` is not hex
/// * `MalformedReason::InvalidSize` - text after `,` is not a byte-sized decimal
///
/// The access symbol is always the first token and the address always the
/// last; anything between them is ignored.
pub fn parse_line(line: &str, line_number: usize) -> Result<TraceLine, MalformedLineError> {
    if line.starts_with(COMMENT_MARKER) {
        return Ok(TraceLine::Comment);
    }

    let malformed = |reason| MalformedLineError::new(line_number, line, reason);

    let (access_part, size_part) = line
        .split_once(',')
        .ok_or_else(|| malformed(MalformedReason::MissingComma))?;

    let mut tokens = access_part.split_whitespace();
    let symbol = tokens
        .next()
        .ok_or_else(|| malformed(MalformedReason::EmptyAccess))?;
    let address_token = tokens.last().unwrap_or(symbol);

    let address = parse_address(address_token)
        .ok_or_else(|| malformed(MalformedReason::InvalidAddress(address_token.to_string())))?;

    let size_token = size_part.trim();
    let size = size_token
        .parse::<u8>()
        .map_err(|_| malformed(MalformedReason::InvalidSize(size_token.to_string())))?;

    let Some(access_type) = AccessType::from_symbol(symbol) else {
        trace!("Line {}: unrecognized access symbol '{}'", line_number, symbol);
        return Ok(TraceLine::Unrecognized);
    };

    Ok(TraceLine::Access(MemoryAccess {
        access_type,
        address,
        size,
    }))
}

/// Parse a base-16 address, with or without a `0x` prefix
///
/// **Public** - shared with tests
pub fn parse_address(token: &str) -> Option<u64> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);

    // from_str_radix tolerates a leading '+', lackey never writes one
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    u64::from_str_radix(digits, 16).ok()
}
