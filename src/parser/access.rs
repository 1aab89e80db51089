//! Access-type classification for lackey trace lines.
//!
//! Lackey tags every memory event with a one-letter symbol:
//! `I` (instruction fetch), `L` (load), `S` (store), `M` (modify).

use crate::utils::config::{KIND_DATA_READ, KIND_DATA_WRITE, KIND_INSTRUCTION_READ};
use serde::Serialize;
use std::fmt;

/// Type of memory access recorded by lackey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessType {
    InstructionRead,
    DataRead,
    DataWrite,
    DataModify,
}

impl AccessType {
    /// Map a raw lackey symbol to an access type
    ///
    /// Returns `None` for symbols lackey does not emit.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "I" => Some(Self::InstructionRead),
            "L" => Some(Self::DataRead),
            "S" => Some(Self::DataWrite),
            "M" => Some(Self::DataModify),
            _ => None,
        }
    }

    /// Access-kind code written to the binary record
    ///
    /// `DataModify` has no code: a modify is a read and a write at once
    /// and the record format cannot express it, so such lines are dropped.
    pub fn kind_code(self) -> Option<u8> {
        match self {
            Self::InstructionRead => Some(KIND_INSTRUCTION_READ),
            Self::DataRead => Some(KIND_DATA_READ),
            Self::DataWrite => Some(KIND_DATA_WRITE),
            Self::DataModify => None,
        }
    }

    /// Inverse of `kind_code`
    pub fn from_kind_code(code: u8) -> Option<Self> {
        match code {
            KIND_INSTRUCTION_READ => Some(Self::InstructionRead),
            KIND_DATA_READ => Some(Self::DataRead),
            KIND_DATA_WRITE => Some(Self::DataWrite),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::InstructionRead => "I",
            Self::DataRead => "L",
            Self::DataWrite => "S",
            Self::DataModify => "M",
        }
    }
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InstructionRead => "instruction-read",
            Self::DataRead => "data-read",
            Self::DataWrite => "data-write",
            Self::DataModify => "data-modify",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_symbol() {
        assert_eq!(AccessType::from_symbol("I"), Some(AccessType::InstructionRead));
        assert_eq!(AccessType::from_symbol("L"), Some(AccessType::DataRead));
        assert_eq!(AccessType::from_symbol("S"), Some(AccessType::DataWrite));
        assert_eq!(AccessType::from_symbol("M"), Some(AccessType::DataModify));
        assert_eq!(AccessType::from_symbol("X"), None);
        // Symbols are case-sensitive
        assert_eq!(AccessType::from_symbol("i"), None);
    }

    #[test]
    fn test_kind_codes() {
        assert_eq!(AccessType::InstructionRead.kind_code(), Some(0));
        assert_eq!(AccessType::DataRead.kind_code(), Some(1));
        assert_eq!(AccessType::DataWrite.kind_code(), Some(3));
        assert_eq!(AccessType::DataModify.kind_code(), None);
    }

    #[test]
    fn test_from_kind_code() {
        assert_eq!(AccessType::from_kind_code(0), Some(AccessType::InstructionRead));
        assert_eq!(AccessType::from_kind_code(3), Some(AccessType::DataWrite));
        assert_eq!(AccessType::from_kind_code(2), None);
    }
}
