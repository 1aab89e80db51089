//! Lackey trace parsing.
//!
//! This module handles:
//! - Classifying trace lines (comment, access, unrecognized)
//! - Mapping lackey access symbols to record kind codes

pub mod access;
pub mod lackey;

// Re-export main types
pub use access::AccessType;
pub use lackey::{parse_address, parse_line, MemoryAccess, TraceLine};
