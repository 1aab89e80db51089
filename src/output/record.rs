//! Binary trace record layout.
//!
//! Each record is 16 bytes, little-endian:
//!
//! | Offset | Field    | Type |
//! |--------|----------|------|
//! | 0      | address  | u64  |
//! | 8      | kind     | u8   |
//! | 9      | size     | u8   |
//! | 10     | pad      | u8   |
//! | 11     | pad      | u8   |
//! | 12     | reserved | u32  |
//!
//! Downstream simulators read this layout byte-for-byte.

use crate::parser::{AccessType, MemoryAccess};
use crate::utils::config::RECORD_SIZE;
use crate::utils::error::DecodeError;
use std::io::{self, Write};

/// One memory access in the binary trace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceRecord {
    pub address: u64,
    pub kind: u8,
    pub size: u8,
}

impl TraceRecord {
    pub fn new(address: u64, kind: u8, size: u8) -> Self {
        Self { address, kind, size }
    }

    /// Build a record from a parsed access
    ///
    /// Returns `None` for access types with no kind code.
    pub fn from_access(access: &MemoryAccess) -> Option<Self> {
        access
            .access_type
            .kind_code()
            .map(|kind| Self::new(access.address, kind, access.size))
    }

    pub fn access_type(&self) -> Option<AccessType> {
        AccessType::from_kind_code(self.kind)
    }

    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        let mut bytes = [0u8; RECORD_SIZE];
        bytes[0..8].copy_from_slice(&self.address.to_le_bytes());
        bytes[8] = self.kind;
        bytes[9] = self.size;
        // bytes 10..16 stay zero
        bytes
    }

    /// Decode a record
    ///
    /// # Arguments
    /// * `bytes` - Raw record
    /// * `offset` - Byte offset of the record in its file, for error reporting
    ///
    /// # Errors
    /// * `DecodeError::UnknownKind` - kind byte is not 0, 1 or 3
    /// * `DecodeError::NonZeroPadding` - any of bytes 10..16 is set
    pub fn from_bytes(bytes: &[u8; RECORD_SIZE], offset: u64) -> Result<Self, DecodeError> {
        let mut address = [0u8; 8];
        address.copy_from_slice(&bytes[0..8]);

        let kind = bytes[8];
        if AccessType::from_kind_code(kind).is_none() {
            return Err(DecodeError::UnknownKind { offset, kind });
        }

        if bytes[10..].iter().any(|&b| b != 0) {
            return Err(DecodeError::NonZeroPadding { offset });
        }

        Ok(Self::new(u64::from_le_bytes(address), kind, bytes[9]))
    }

    /// Append the encoded record to a sink
    pub fn write_to<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        sink.write_all(&self.to_bytes())
    }
}
