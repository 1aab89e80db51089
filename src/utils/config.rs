//! Configuration and constants for the converter.

/// Default lackey log read by the CLI when no input path is given
pub const DEFAULT_INPUT_PATH: &str = "data/cachetest";

/// Default binary trace written by the CLI when no output path is given
pub const DEFAULT_OUTPUT_PATH: &str = "trace.tr";

/// Prefix of valgrind's own diagnostic lines (`==1234== ...`)
pub const COMMENT_MARKER: &str = "==";

/// Size in bytes of one encoded trace record
pub const RECORD_SIZE: usize = 16;

// Access-kind codes in the binary record.
// Code 2 is unused by this format.
pub const KIND_INSTRUCTION_READ: u8 = 0;
pub const KIND_DATA_READ: u8 = 1;
pub const KIND_DATA_WRITE: u8 = 3;
